use deepdive_core::DiffLine;
use deepdive_core::DiffLineKind;
use ratatui::style::Stylize;
use ratatui::text::Line;

/// Maps a classified diff line to a styled ratatui line. The text is
/// rendered verbatim; only colour carries the classification.
pub(crate) fn styled_diff_line(line: &DiffLine) -> Line<'static> {
    let text = line.text.clone();
    match line.kind {
        DiffLineKind::FileHeader => Line::from(text.bold()),
        DiffLineKind::HunkHeader => Line::from(text.cyan()),
        DiffLineKind::Addition => Line::from(text.green()),
        DiffLineKind::Deletion => Line::from(text.red()),
        DiffLineKind::Context => Line::from(text),
        DiffLineKind::Placeholder => Line::from(text.dim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepdive_core::classify_patch;

    #[test]
    fn every_classified_line_renders_verbatim() {
        let patch = "--- a/f\n+++ b/f\n@@ -1 +1 @@\n-old\n+new";
        let lines = classify_patch(patch);
        for (classified, styled) in lines.iter().zip(lines.iter().map(styled_diff_line)) {
            let rendered: String = styled
                .spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect();
            assert_eq!(rendered, classified.text);
        }
    }
}
