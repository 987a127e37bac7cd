use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One conversation as found in `conversations.json`.
///
/// The `mapping` holds the full message tree, including every edit/regeneration
/// branch. Insertion order of the mapping is preserved (via [`IndexMap`])
/// because model-slug resolution scans nodes in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConversation {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_conversation_id")]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_epoch_timestamp")]
    pub create_time: DateTime<Utc>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_epoch_timestamp")]
    pub update_time: DateTime<Utc>,
    pub mapping: IndexMap<String, RawNode>,
    #[serde(default)]
    pub plugin_ids: Option<Vec<String>>,
}

impl RawConversation {
    /// Whether any plugin/tool capability was enabled for this conversation
    pub fn plugin_enabled(&self) -> bool {
        self.plugin_ids.as_ref().is_some_and(|ids| !ids.is_empty())
    }
}

/// One node of the conversation tree.
///
/// Exactly one node per conversation has no `message` payload: the synthetic
/// root. Every other node carries a [`RawMessage`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub message: Option<RawMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub author: MessageAuthor,
    pub content: MessageContent,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub metadata: Option<MessageMetadata>,
}

/// Message author: role is one of system/assistant/user/tool; `name` is the
/// tool name when role is "tool".
#[derive(Debug, Clone, Deserialize)]
pub struct MessageAuthor {
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Message content. `parts` entries are arbitrary JSON values: plain strings
/// for text, objects for image artifacts in `multimodal_text` messages.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageContent {
    pub content_type: String,
    #[serde(default)]
    pub parts: Option<Vec<Value>>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageMetadata {
    #[serde(default)]
    pub model_slug: Option<String>,
    #[serde(default)]
    pub finish_details: Option<FinishDetails>,
}

/// Finish-reason markers attached to assistant messages.
#[derive(Debug, Clone, Deserialize)]
pub struct FinishDetails {
    #[serde(default, rename = "stop")]
    pub stop_marker: Option<String>,
    #[serde(default, rename = "type")]
    pub finish_type: Option<String>,
}
