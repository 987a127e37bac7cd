//! ChatGPT History Search - Search and preview exported ChatGPT conversations
//! from a desktop launcher's quick-search interface.
//!
//! This library converts an exported `conversations.json` (a tree of messages
//! per conversation, including every edit/regeneration branch) into flat
//! searchable records and serves filtered results to a host launcher on each
//! keystroke. It supports:
//!
//! - Linearizing a branching conversation tree by always following the most
//!   recent branch
//! - Precomputing display fields (concatenated transcript, model names, URLs,
//!   search keys)
//! - `|`-delimited AND queries with `key=value` field clauses
//! - Match-centered fixed-length preview extraction
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chatgpt_history_search::linearizer::{build_rows, linearize_conversation};
//! use chatgpt_history_search::filters::filter_rows;
//! use chatgpt_history_search::parsers::parse_export_file;
//!
//! let conversations = parse_export_file(Path::new("conversations.json"))?;
//! let records = conversations
//!     .iter()
//!     .map(linearize_conversation)
//!     .collect::<Result<Vec<_>, _>>()?;
//! let rows = build_rows(&records)?;
//! let hits = filter_rows(rows, "model=gpt-4|lifetime");
//! println!("{} conversations match", hits.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cache;
pub mod cli;
pub mod filters;
pub mod launcher;
pub mod linearizer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use filters::{filter_rows, search_and_extract_preview};
pub use linearizer::{build_rows, linearize_conversation};
pub use models::{ConversationRecord, SearchRow};
pub use parsers::parse_export_file;
