//! Host-launcher integration: script-filter feedback JSON and quick-look
//! markdown previews.
//!
//! The launcher invokes the binary on each keystroke and renders whatever
//! item list comes back on stdout. Two empty states are deliberately kept
//! distinct: "No results found" (nothing converted yet, the user should run
//! an import) versus "No matching results found" (the query ate everything,
//! the user should loosen it).

pub mod feedback;
pub mod markdown;

pub use feedback::{DEFAULT_PREVIEW_LEN, Feedback, Item};
pub use markdown::{generate_preview_markdown, write_preview_files};
