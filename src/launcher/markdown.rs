use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::linearizer::rows::{chatgpt_url, typingmind_url};
use crate::models::{ConversationRecord, model_display_name, model_shorthand};
use crate::utils::iso_short_date;

/// Render one conversation as a quick-look markdown document.
///
/// Messages alternate user/assistant styling by position along the linear
/// path, which holds for ordinary text conversations (tool transcripts may
/// shift the parity, acceptable for a visual preview).
pub fn generate_preview_markdown(record: &ConversationRecord) -> Result<String> {
    let model = model_display_name(&record.model_slug)
        .with_context(|| format!("Conversation {}", record.id))?;
    let date_short = iso_short_date(&record.update_time);
    let title_suffix = format!("{} ({})", date_short, model_shorthand(model));

    let formatted_messages = record
        .linear_messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let class = if i % 2 == 0 { "user" } else { "assistant" };
            format!("<pre class=\"{}\">\n{}\n</pre>", class, message)
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");

    Ok(format!(
        "<link rel=\"stylesheet\" href=\"../css/markdown_preview.css\">\n\n\
         # {title}\n\n\
         [ChatGPT]({chatgpt})\n\n\
         [TypingMind]({typingmind})\n\n\
         {suffix}\n\n\
         ---\n\n\
         {messages}\n",
        title = record.title,
        chatgpt = chatgpt_url(&record.id),
        typingmind = typingmind_url(&record.id),
        suffix = title_suffix,
        messages = formatted_messages,
    ))
}

/// Write one `<id>.md` per record into `output_dir`, returning the count
pub fn write_preview_files(records: &[ConversationRecord], output_dir: &Path) -> Result<usize> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create preview output directory: {}", output_dir.display())
    })?;

    for record in records {
        let markdown = generate_preview_markdown(record)?;
        let path = output_dir.join(format!("{}.md", record.id));
        fs::write(&path, markdown)
            .with_context(|| format!("Failed to write preview file: {}", path.display()))?;
    }

    Ok(records.len())
}
