use anyhow::{Context, Result};

use crate::models::{ConversationRecord, SearchRow, model_display_name, model_shorthand};
use crate::utils::iso_short_date;

/// Separator between messages in the concatenated transcript
pub const MESSAGE_SEPARATOR: &str = "\n---\n";

/// Target width of the padded launcher title, in characters
const LAUNCHER_TITLE_WIDTH: usize = 74;

/// Precompute display fields for a batch of records, preserving input order
pub fn build_rows(records: &[ConversationRecord]) -> Result<Vec<SearchRow>> {
    records.iter().map(build_row).collect()
}

/// Precompute the display fields for one record.
///
/// # Errors
///
/// Fails when the record's model slug is not in the catalog; the error names
/// the conversation so format drift is caught at conversion time, not at
/// display time.
pub fn build_row(record: &ConversationRecord) -> Result<SearchRow> {
    let model = model_display_name(&record.model_slug)
        .with_context(|| format!("Conversation {}", record.id))?
        .to_string();
    let concatenated_messages = record.linear_messages.join(MESSAGE_SEPARATOR);

    let search_key = SearchRow::build_search_key(
        &record.id,
        &record.title,
        &record.update_time,
        &record.create_time,
        &model,
        &concatenated_messages,
    );

    Ok(SearchRow {
        id: record.id.clone(),
        title: record.title.clone(),
        update_time: record.update_time.clone(),
        create_time: record.create_time.clone(),
        display_title: padded_title(&record.title, &record.update_time, &model),
        chatgpt_url: chatgpt_url(&record.id),
        typingmind_url: typingmind_url(&record.id),
        model,
        plugin_enabled: record.plugin_enabled,
        concatenated_messages,
        search_key,
    })
}

pub fn chatgpt_url(id: &str) -> String {
    format!("https://chat.openai.com/c/{}", id)
}

pub fn typingmind_url(id: &str) -> String {
    format!("https://www.typingmind.com/chat/{}", id)
}

/// Title padded with spaces so the `yy-mm-dd (model)` suffix lines up at the
/// right edge of the launcher's fixed-width result list
fn padded_title(title: &str, update_time: &str, model: &str) -> String {
    let date_short = iso_short_date(update_time);
    let suffix = format!("{} ({})", date_short, model_shorthand(model));

    let used = title.chars().count() + suffix.chars().count();
    let padding = LAUNCHER_TITLE_WIDTH.saturating_sub(used).max(2);
    format!("{}{}{}", title, " ".repeat(padding), suffix)
}
