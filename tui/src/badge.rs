use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Span;

/// Colour for a language tag, keyed case-insensitively by family.
fn lang_color(language: &str) -> Color {
    match language.to_lowercase().as_str() {
        "python" => Color::Yellow,
        "js" | "javascript" => Color::LightYellow,
        "ts" | "typescript" => Color::Blue,
        "java" => Color::Red,
        "go" => Color::Cyan,
        "rust" => Color::LightRed,
        "c" => Color::Gray,
        "cpp" | "c++" => Color::LightBlue,
        "ruby" => Color::Magenta,
        _ => Color::DarkGray,
    }
}

/// A `[lang]` badge span in the language's colour.
pub(crate) fn lang_badge(language: &str) -> Span<'static> {
    Span::styled(
        format!("[{language}]"),
        Style::default().fg(lang_color(language)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_case_insensitive() {
        assert_eq!(lang_color("Python"), lang_color("python"));
        assert_eq!(lang_color("JS"), lang_color("javascript"));
    }

    #[test]
    fn unknown_language_gets_default_colour() {
        assert_eq!(lang_color("cobol"), Color::DarkGray);
    }
}
