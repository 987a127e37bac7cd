use std::cmp::min;

/// Extract a fixed-length preview window from `message` centered on the first
/// occurrence of `query`.
///
/// Returns exactly `return_len` characters when the message allows it (the
/// whole message when it is shorter), always preserving the original casing
/// of `message` even for a case-insensitive search. Returns an empty string
/// when the query does not occur. When the query itself is at least
/// `return_len` characters, the window starts at the match and the query may
/// be truncated.
///
/// Window placement: symmetric padding of `(return_len - query_len) / 2` on
/// each side of the match, clamped to the message bounds; if one side was
/// clamped, the other side is extended until the target length is reached or
/// both sides are exhausted.
///
/// All lengths and offsets are in characters, not bytes, so multi-byte
/// transcripts never split a code point.
pub fn search_and_extract_preview(
    query: &str,
    message: &str,
    return_len: usize,
    case_sensitive: bool,
) -> String {
    let message_chars: Vec<char> = message.chars().collect();
    let query_chars: Vec<char> = query.chars().collect();

    let Some(match_start) = find_match(&message_chars, &query_chars, case_sensitive) else {
        return String::new();
    };

    let message_len = message_chars.len();
    let query_len = query_chars.len();

    if query_len >= return_len {
        let end = min(match_start + return_len, message_len);
        return message_chars[match_start..end].iter().collect();
    }

    let match_end = match_start + query_len;
    let padding = (return_len - query_len) / 2;
    let mut start = match_start.saturating_sub(padding);
    let mut end = min(message_len, match_end + padding);

    // One side hit a message boundary: grow the other side while room remains
    while end - start < return_len {
        if start > 0 {
            start -= 1;
        } else if end < message_len {
            end += 1;
        } else {
            break;
        }
    }

    message_chars[start..end].iter().collect()
}

/// Character index of the first occurrence of `query` in `message`.
/// An empty query matches at position 0, like substring search.
fn find_match(message: &[char], query: &[char], case_sensitive: bool) -> Option<usize> {
    if query.is_empty() {
        return Some(0);
    }
    if query.len() > message.len() {
        return None;
    }

    message.windows(query.len()).position(|window| {
        if case_sensitive {
            window == query
        } else {
            window.iter().zip(query).all(|(a, b)| fold_char(*a) == fold_char(*b))
        }
    })
}

/// Single-char case fold. Maps 1:1 so window indices stay aligned with the
/// original message; multi-char expansions (rare) keep their first char.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
