//! Data models for exported ChatGPT conversation history.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`RawConversation`] / [`RawNode`] - The tree-structured export format
//! - [`ConversationRecord`] - One flat record per linearized conversation
//! - [`SearchRow`] - A record annotated with precomputed display fields
//!
//! These models use serde for JSON deserialization with custom deserializers
//! for special fields (fractional epoch timestamps, conversation ids) in the
//! `parsers::deserializers` module.

pub mod catalog;
pub mod export;
pub mod record;
pub mod row;

pub use catalog::{DEFAULT_MODEL_SLUG, is_placeholder_message, model_display_name, model_shorthand};
pub use export::{
    MessageAuthor, MessageContent, MessageMetadata, RawConversation, RawMessage, RawNode,
};
pub use record::ConversationRecord;
pub use row::SearchRow;
