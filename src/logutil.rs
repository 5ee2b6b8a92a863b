//! Log sanitization for user-supplied strings (ticket and lesson titles,
//! quiz questions) so every log record stays on a single line.

/// Maximum characters of user text reproduced in a log line.
const MAX_PREVIEW: usize = 160;

/// Escape a string for single-line logging. Newlines, carriage returns and
/// tabs become their two-character escapes, backslashes are doubled, and any
/// other control character is rendered as `\xNN`. Input longer than the
/// preview cap is truncated with a trailing ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    let mut seen = 0usize;
    for ch in s.chars() {
        if seen >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        seen += 1;
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("a\nb\rc\td\\e"), "a\\nb\\rc\\td\\\\e");
        assert_eq!(escape_log("bell\x07"), "bell\\x07");
    }

    #[test]
    fn truncates_long_input() {
        let long = "x".repeat(500);
        let esc = escape_log(&long);
        assert!(esc.ends_with('…'));
        assert!(esc.chars().count() <= 161);
    }
}
