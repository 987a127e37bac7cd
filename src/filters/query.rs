use crate::models::SearchRow;

/// Apply a raw query string to the row set, returning the surviving rows.
///
/// Stable filter: relative input order is preserved, nothing is re-sorted.
/// An empty query matches every row.
pub fn filter_rows(rows: Vec<SearchRow>, query: &str) -> Vec<SearchRow> {
    let query = query.to_lowercase();
    let subqueries: Vec<&str> = query.split('|').collect();

    rows.into_iter().filter(|row| row_matches(row, &subqueries)).collect()
}

/// A row matches only if every subquery matches (AND across `|` clauses)
fn row_matches(row: &SearchRow, subqueries: &[&str]) -> bool {
    subqueries.iter().all(|subquery| subquery_matches(row, subquery))
}

/// One `|`-delimited clause: either `key=value` against a named field, or a
/// free-text substring probe against the precomputed search key.
fn subquery_matches(row: &SearchRow, subquery: &str) -> bool {
    if let Some((key, value)) = subquery.split_once('=') {
        // Field-scoped clause: the key must exist; value match is a
        // case-insensitive substring check against that field only
        match row.field(key) {
            Some(field_value) => field_value.to_lowercase().contains(value.trim()),
            None => false,
        }
    } else {
        // Free-text clause, untrimmed on purpose: a trailing space is a
        // meaningful part of a substring search
        row.search_key.contains(subquery)
    }
}
