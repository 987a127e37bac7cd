//! Shared test fixtures: builders for raw conversation trees and export files
#![allow(dead_code)]

use std::io::Write;

use chatgpt_history_search::models::RawConversation;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Builder for one raw conversation tree in the export format
pub struct ConversationBuilder {
    id: String,
    title: String,
    create_time: f64,
    update_time: f64,
    plugin_ids: Vec<String>,
    nodes: Vec<(String, Value)>,
}

impl ConversationBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: "Untitled".to_string(),
            create_time: 1682000887.0,
            update_time: 1683712597.5,
            plugin_ids: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn update_time(mut self, secs: f64) -> Self {
        self.update_time = secs;
        self
    }

    pub fn plugin(mut self, plugin_id: &str) -> Self {
        self.plugin_ids.push(plugin_id.to_string());
        self
    }

    /// The synthetic root: no message payload
    pub fn root(self, id: &str, children: &[&str]) -> Self {
        self.node(id, None, children, json!(null))
    }

    /// A plain text node
    pub fn text_node(
        self,
        id: &str,
        parent: &str,
        children: &[&str],
        role: &str,
        text: &str,
    ) -> Self {
        let message = json!({
            "author": {"role": role},
            "content": {"content_type": "text", "parts": [text]},
        });
        self.node(id, Some(parent), children, message)
    }

    /// A text node carrying a model slug in its metadata
    pub fn model_node(
        self,
        id: &str,
        parent: &str,
        children: &[&str],
        text: &str,
        slug: &str,
    ) -> Self {
        let message = json!({
            "author": {"role": "assistant"},
            "content": {"content_type": "text", "parts": [text]},
            "metadata": {"model_slug": slug},
        });
        self.node(id, Some(parent), children, message)
    }

    /// An arbitrary node, for malformed or exotic payloads
    pub fn node(
        mut self,
        id: &str,
        parent: Option<&str>,
        children: &[&str],
        message: Value,
    ) -> Self {
        self.nodes.push((
            id.to_string(),
            json!({
                "id": id,
                "parent": parent,
                "children": children,
                "message": message,
            }),
        ));
        self
    }

    pub fn build_value(&self) -> Value {
        let mut mapping = serde_json::Map::new();
        for (id, node) in &self.nodes {
            mapping.insert(id.clone(), node.clone());
        }
        json!({
            "id": self.id,
            "title": self.title,
            "create_time": self.create_time,
            "update_time": self.update_time,
            "mapping": mapping,
            "plugin_ids": self.plugin_ids,
        })
    }

    pub fn build(&self) -> RawConversation {
        serde_json::from_value(self.build_value()).expect("builder produced invalid conversation")
    }
}

/// Write a conversations.json export file from the given builders
pub fn write_export_file(conversations: &[ConversationBuilder]) -> NamedTempFile {
    let array = Value::Array(conversations.iter().map(|c| c.build_value()).collect());
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(serde_json::to_string_pretty(&array).unwrap().as_bytes())
        .expect("Failed to write export file");
    file.flush().expect("Failed to flush export file");
    file
}

/// A minimal two-message conversation: user question, assistant answer
pub fn simple_conversation(id: &str, title: &str, question: &str, answer: &str) -> ConversationBuilder {
    ConversationBuilder::new(id)
        .title(title)
        .root("root", &["u1"])
        .text_node("u1", "root", &["a1"], "user", question)
        .model_node("a1", "u1", &[], answer, "gpt-4")
}
