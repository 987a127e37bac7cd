//! Parsers for the ChatGPT export and the derived linear-records file.
//!
//! # Error Handling Strategy
//!
//! Unlike line-oriented logs, `conversations.json` is a single JSON document:
//! either the whole array parses or it doesn't, so there is no per-line
//! skip-and-continue here. Failures carry `anyhow` context naming the file.
//! A size ceiling is checked up front so a runaway file is rejected before
//! any parsing work happens.

pub mod deserializers;
pub mod export;

pub use export::{parse_export_file, parse_records_file, write_records_file};
