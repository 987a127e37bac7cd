//! Static model-slug lookup tables.
//!
//! Process-wide configuration with no runtime mutation. An unrecognized slug
//! is an error: silently falling back to a guessed name would hide export
//! format drift until results display wrong labels.

use anyhow::{Result, bail};

/// Default slug assumed when a conversation carries no model metadata at all
pub const DEFAULT_MODEL_SLUG: &str = "text-davinci-002-render";

/// Filler messages emitted around DALL·E image outputs. They carry no
/// conversational content and are dropped during linearization.
const DALLE_PLACEHOLDER_MESSAGES: &[&str] = &[
    "DALL·E returned some images. They are already displayed to the user. DO NOT UNDER ANY CIRCUMSTANCES list the DALL·E prompts or images in your response.",
    "DALL·E displayed 1 images. The images are already plainly visible, so don't repeat the descriptions in detail.",
];

/// Resolve an internal model slug to its user-facing display name.
///
/// # Errors
///
/// Returns a descriptive error for an unrecognized slug.
pub fn model_display_name(slug: &str) -> Result<&'static str> {
    match slug {
        "text-davinci-002-render"
        | "text-davinci-002-render-sha"
        | "text-davinci-002-render-paid" => Ok("gpt-3.5-turbo"),
        "gpt-4" | "gpt-4-mobile" => Ok("gpt-4"),
        "gpt-4-plugins" => Ok("gpt-4-plugins"),
        "gpt-4-browsing" => Ok("gpt-4-browsing"),
        "gpt-4-code-interpreter" => Ok("gpt-4-code-interpreter"),
        "gpt-4-dalle" => Ok("gpt-4-dalle"),
        _ => bail!("Unknown model slug: {}", slug),
    }
}

/// Short label used in launcher subtitles and title suffixes
pub fn model_shorthand(display_name: &str) -> &str {
    match display_name {
        "gpt-3.5-turbo" => "3.5",
        "gpt-4" => "4",
        other => other,
    }
}

/// Whether a message body is a known DALL·E filler placeholder
pub fn is_placeholder_message(content: &str) -> bool {
    DALLE_PLACEHOLDER_MESSAGES.contains(&content)
}
