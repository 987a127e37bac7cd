//! Conversation linearization: branching export tree -> flat records.
//!
//! A ChatGPT export keeps every edit/regeneration branch. The linearizer
//! reduces each conversation's tree to the single path the user ended up
//! viewing by always descending through the most recently added child, then
//! precomputes the display fields ([`SearchRow`](crate::models::SearchRow))
//! the launcher needs on each keystroke.
//!
//! # Error Handling Strategy
//!
//! Malformed trees (no unique synthetic root, dangling id references) fail
//! that conversation's conversion with a descriptive `anyhow` error naming
//! the conversation; there is no fallback-root guessing. The CLI layer
//! decides whether to skip a failed conversation or abort the run.

pub mod convert;
pub mod rows;

pub use convert::linearize_conversation;
pub use rows::{MESSAGE_SEPARATOR, build_row, build_rows};
