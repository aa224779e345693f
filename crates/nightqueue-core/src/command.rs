//! Parsing of the chat command text Nightbot forwards.

/// Prefix of the add command as typed in chat.
pub const QUEUE_PREFIX: &str = "!queue ";

/// Prefix of the remove command as typed in chat.
pub const REMOVE_PREFIX: &str = "!removequeue ";

/// Strip `prefix` from the start of `raw` (ignoring leading whitespace) and trim the rest.
pub fn strip_command<'a>(raw: &'a str, prefix: &str) -> &'a str {
    let raw = raw.trim_start();
    raw.strip_prefix(prefix).unwrap_or(raw).trim()
}

/// Extract the requested item from an add command. Empty means nothing was requested.
pub fn parse_item(raw_message: &str) -> &str {
    strip_command(raw_message, QUEUE_PREFIX)
}

/// Read a leading integer the way chat users type positions.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits; trailing text is ignored (`"3rd"` reads as 3). Returns
/// `None` when no digits are present or the value does not fit.
pub fn parse_position(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
