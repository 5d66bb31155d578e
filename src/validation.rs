//! Input sanitation for player-supplied text.
//!
//! Player names are shown back in every status line and written to logs, so
//! they are trimmed, stripped of control characters and length-capped before
//! a game starts.

/// Longest preview of user text written to a log line.
const MAX_LOG_PREVIEW: usize = 120;

/// Clean up a raw player name.
///
/// - trims surrounding whitespace
/// - drops control characters (newlines, escapes, tabs)
/// - collapses inner whitespace runs to a single space
/// - truncates to `max_chars` characters (never splits a char)
/// - falls back to `default` when nothing is left
pub fn normalize_player_name(raw: &str, default: &str, max_chars: usize) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(max_chars).collect();
    let truncated = truncated.trim_end().to_string();
    if truncated.is_empty() {
        default.to_string()
    } else {
        truncated
    }
}

/// Escape a string so it stays on one log line.
///
/// Newlines, carriage returns, tabs and backslashes are escaped, other
/// control characters become `\xNN`, and long input is cut with an ellipsis.
pub fn escape_log(s: &str) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(s.len().min(MAX_LOG_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_LOG_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
