//! Query filtering and preview extraction over precomputed search rows.
//!
//! # Query Syntax
//!
//! ```text
//! query     := subquery ('|' subquery)*
//! subquery  := key '=' value | free-text
//! ```
//!
//! A row matches only if EVERY subquery matches: the `|` delimiter joins
//! clauses with logical AND. That reads oddly but is intentional, and it is
//! the defined semantics: within a subquery there is no OR, so `|` is purely
//! a clause separator. Matching is case-insensitive throughout.

pub mod preview;
pub mod query;

pub use preview::search_and_extract_preview;
pub use query::filter_rows;
