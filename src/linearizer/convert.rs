use anyhow::{Result, bail};
use chrono::SecondsFormat;

use crate::models::catalog::DEFAULT_MODEL_SLUG;
use crate::models::{ConversationRecord, RawConversation, RawMessage, is_placeholder_message};

/// Convert one raw conversation tree into a flat [`ConversationRecord`].
///
/// The walk starts at the synthetic root (the unique node with no message
/// payload) and at every branch point follows the last child in insertion
/// order, i.e. the most recent edit/regeneration. Nodes whose content
/// resolves to nothing (image artifacts, placeholder filler, empty strings)
/// are dropped from the transcript.
///
/// The reported model slug is resolved with a most-recent-metadata-wins scan
/// over the whole mapping in insertion order, not just the final path, so it
/// can reflect a branch the user later abandoned. This mirrors what the
/// export itself records; see DESIGN.md for the trade-off.
///
/// # Errors
///
/// Fails with a validation error if the tree has no unique root or contains
/// dangling id references.
pub fn linearize_conversation(conversation: &RawConversation) -> Result<ConversationRecord> {
    validate_tree(conversation)?;

    let mut model_slug = DEFAULT_MODEL_SLUG.to_string();
    for node in conversation.mapping.values() {
        if let Some(slug) = node
            .message
            .as_ref()
            .and_then(|m| m.metadata.as_ref())
            .and_then(|meta| meta.model_slug.as_deref())
        {
            model_slug = slug.to_string();
        }
    }

    let root_id = find_root(conversation)?;

    let mut linear_messages = Vec::new();
    let mut current = root_id;
    loop {
        // validate_tree guarantees every child id resolves
        let node = &conversation.mapping[current];
        let Some(next_id) = node.children.last() else {
            break;
        };
        let next = &conversation.mapping[next_id.as_str()];
        if let Some(text) = next.message.as_ref().and_then(resolve_text) {
            linear_messages.push(text);
        }
        current = next_id.as_str();
    }

    Ok(ConversationRecord {
        id: conversation.id.clone(),
        title: conversation.title.clone(),
        update_time: conversation.update_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        create_time: conversation.create_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        model_slug,
        plugin_enabled: conversation.plugin_enabled(),
        linear_messages,
    })
}

/// Check that every parent and child id resolves to a node in the mapping
fn validate_tree(conversation: &RawConversation) -> Result<()> {
    for (id, node) in &conversation.mapping {
        if let Some(parent) = &node.parent {
            if !conversation.mapping.contains_key(parent) {
                bail!(
                    "Conversation {}: node {} references missing parent {}",
                    conversation.id,
                    id,
                    parent
                );
            }
        }
        for child in &node.children {
            if !conversation.mapping.contains_key(child) {
                bail!(
                    "Conversation {}: node {} references missing child {}",
                    conversation.id,
                    id,
                    child
                );
            }
        }
    }
    Ok(())
}

/// Find the unique synthetic root: the one node with no message payload
fn find_root(conversation: &RawConversation) -> Result<&str> {
    let mut roots = conversation
        .mapping
        .iter()
        .filter(|(_, node)| node.message.is_none())
        .map(|(id, _)| id.as_str());

    let Some(root) = roots.next() else {
        bail!("Conversation {}: no synthetic root node found", conversation.id);
    };
    if let Some(extra) = roots.next() {
        bail!(
            "Conversation {}: multiple root candidates ({}, {})",
            conversation.id,
            root,
            extra
        );
    }
    Ok(root)
}

/// Resolve a node's displayable text, or `None` when the node contributes
/// nothing to the transcript.
///
/// Content is the last element of `content.parts` when present, falling back
/// to `content.text`. A last part that is not a plain string is an image
/// artifact (DALL·E outputs in `multimodal_text` messages). Known DALL·E
/// filler placeholders and empty strings are dropped as well.
fn resolve_text(message: &RawMessage) -> Option<String> {
    let content = &message.content;

    let text = if let Some(parts) = content.parts.as_ref().filter(|p| !p.is_empty()) {
        match parts.last() {
            Some(serde_json::Value::String(s)) => s.clone(),
            // Image artifact (an object-valued part), regardless of content type
            _ => return None,
        }
    } else {
        content.text.clone()?
    };

    if text.is_empty() || is_placeholder_message(&text) {
        return None;
    }
    Some(text)
}
