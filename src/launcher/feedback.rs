use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::filters::search_and_extract_preview;
use crate::models::{SearchRow, model_shorthand};
use crate::utils::iso_short_date;

/// Characters of transcript shown in each result subtitle
pub const DEFAULT_PREVIEW_LEN: usize = 100;

/// Script-filter feedback document, serialized to stdout for the launcher
#[derive(Debug, Serialize)]
pub struct Feedback {
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mods: BTreeMap<String, Modifier>,
}

#[derive(Debug, Serialize)]
pub struct Icon {
    pub path: String,
}

/// Auxiliary action binding shown while a modifier key is held
#[derive(Debug, Serialize)]
pub struct Modifier {
    pub subtitle: String,
    pub arg: String,
    pub valid: bool,
}

impl Feedback {
    /// A single informational, non-actionable item (empty states)
    pub fn message(text: &str) -> Self {
        Self {
            items: vec![Item {
                title: text.to_string(),
                subtitle: String::new(),
                arg: None,
                valid: false,
                icon: None,
                mods: BTreeMap::new(),
            }],
        }
    }

    /// Build result items for the filtered rows. When a query is present the
    /// subtitle preview is centered on the match; otherwise it is the head of
    /// the transcript.
    pub fn from_rows(query: Option<&str>, rows: &[SearchRow], preview_len: usize) -> Self {
        let items = rows.iter().map(|row| result_item(query, row, preview_len)).collect();
        Self { items }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize launcher feedback")
    }
}

fn result_item(query: Option<&str>, row: &SearchRow, preview_len: usize) -> Item {
    let preview = match query {
        Some(q) if !q.is_empty() => {
            search_and_extract_preview(q, &row.concatenated_messages, preview_len, false)
        }
        _ => row.concatenated_messages.chars().take(preview_len).collect(),
    };
    let subtitle = format!(
        "{} | {} | {}",
        model_shorthand(&row.model),
        iso_short_date(&row.update_time),
        preview
    );

    let mut mods = BTreeMap::new();
    mods.insert(
        "cmd".to_string(),
        Modifier {
            subtitle: "Open on TypingMind".to_string(),
            arg: row.typingmind_url.clone(),
            valid: true,
        },
    );

    Item {
        title: row.display_title.clone(),
        subtitle,
        arg: Some(row.chatgpt_url.clone()),
        valid: true,
        icon: icon_path(&row.model, row.plugin_enabled).map(|path| Icon { path: path.to_string() }),
        mods,
    }
}

/// Result icon by model/plugin combination; `None` falls back to the
/// launcher's default workflow icon
fn icon_path(model: &str, plugin_enabled: bool) -> Option<&'static str> {
    match model {
        "gpt-4" if plugin_enabled => Some("assets/gpt-4-plugins-purple.png"),
        "gpt-4" => Some("assets/GPT-4.png"),
        "gpt-4-plugins" => Some("assets/gpt-4-plugins-purple.png"),
        "gpt-4-code-interpreter" => Some("assets/gpt-4-code-interpreter.png"),
        _ => None,
    }
}
