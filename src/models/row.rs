use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A [`ConversationRecord`](super::ConversationRecord) annotated with
/// precomputed display fields, ready to be filtered and handed to the
/// launcher on each keystroke.
///
/// Fields whose serialized name starts with `_` are display-only: they are
/// excluded from the free-text search key but still addressable through
/// `key=value` query clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRow {
    pub id: String,
    pub title: String,
    pub update_time: String,
    pub create_time: String,
    /// Resolved display name, e.g. `gpt-4` (not the internal slug)
    pub model: String,
    pub plugin_enabled: bool,
    /// Linear transcript joined with `\n---\n`
    pub concatenated_messages: String,
    /// Padded launcher title with date/model suffix
    #[serde(rename = "_title")]
    pub display_title: String,
    #[serde(rename = "_chatgpt_url")]
    pub chatgpt_url: String,
    #[serde(rename = "_typingmind_url")]
    pub typingmind_url: String,
    /// Precomputed lowercase concatenation of the searchable string fields
    #[serde(rename = "_search_key")]
    pub search_key: String,
}

impl SearchRow {
    /// Look up a field value by its query-clause name.
    ///
    /// Every field is addressable here, including the `_`-prefixed
    /// non-searchable ones; `None` means the key does not exist at all.
    pub fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "title" => Some(Cow::Borrowed(&self.title)),
            "update_time" => Some(Cow::Borrowed(&self.update_time)),
            "create_time" => Some(Cow::Borrowed(&self.create_time)),
            "model" => Some(Cow::Borrowed(&self.model)),
            "plugin_enabled" => {
                Some(Cow::Borrowed(if self.plugin_enabled { "true" } else { "false" }))
            }
            "concatenated_messages" => Some(Cow::Borrowed(&self.concatenated_messages)),
            "_title" => Some(Cow::Borrowed(&self.display_title)),
            "_chatgpt_url" => Some(Cow::Borrowed(&self.chatgpt_url)),
            "_typingmind_url" => Some(Cow::Borrowed(&self.typingmind_url)),
            "_search_key" => Some(Cow::Borrowed(&self.search_key)),
            _ => None,
        }
    }

    /// Build the lowercase free-text search key: the space-joined non-empty
    /// searchable string fields, in record order.
    pub fn build_search_key(
        id: &str,
        title: &str,
        update_time: &str,
        create_time: &str,
        model: &str,
        concatenated_messages: &str,
    ) -> String {
        let parts = [id, title, update_time, create_time, model, concatenated_messages];
        parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
