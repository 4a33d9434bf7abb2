use unicode_width::UnicodeWidthChar;

/// Truncates `text` to at most `max_width` terminal columns, appending
/// an ellipsis when anything was cut.
pub(crate) fn truncate_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            // Room is reserved for the ellipsis; bail out on overflow.
            if text.chars().count() > out.chars().count() + 1 {
                out.push('…');
                return out;
            }
            out.push(ch);
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

/// Preview of a problem statement for the list pane: the first 80
/// characters with newlines collapsed to spaces, ellipsis-suffixed.
pub(crate) fn problem_preview(problem_statement: &str) -> String {
    let head: String = problem_statement.chars().take(80).collect();
    let collapsed = head.replace('\n', " ");
    format!("{collapsed}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_text("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_text("abc", 0), "");
    }

    #[test]
    fn preview_collapses_newlines_and_caps_length() {
        let text = "line one\nline two";
        assert_eq!(problem_preview(text), "line one line two…");

        let long = "x".repeat(200);
        let preview = problem_preview(&long);
        assert_eq!(preview.chars().count(), 81);
        assert!(preview.ends_with('…'));
    }
}
