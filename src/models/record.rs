use serde::{Deserialize, Serialize};

/// One flat record per conversation, produced by the linearizer.
///
/// This is the shape written to `linear_conversations.json`. Timestamps are
/// ISO-8601 UTC strings; `linear_messages` is the ordered transcript along the
/// final (always-last-child) path, with empty and non-text nodes dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    pub title: String,
    pub update_time: String,
    pub create_time: String,
    pub model_slug: String,
    pub plugin_enabled: bool,
    pub linear_messages: Vec<String>,
}
