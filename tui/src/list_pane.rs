use deepdive_core::TaskRecord;
use deepdive_core::short_id;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::badge::lang_badge;
use crate::text_formatting::problem_preview;
use crate::text_formatting::truncate_text;

/// Where the visible rows ended up, for mouse hit-testing: `rows_area`
/// is the region holding rows, `start` the filtered index of its first
/// row.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ListLayout {
    pub rows_area: Rect,
    pub start: usize,
}

/// Renders the results counter and the filtered rows, keeping the
/// selected row inside the viewport (window centred on the selection).
pub(crate) fn render_list(
    area: Rect,
    buf: &mut Buffer,
    records: &[TaskRecord],
    filtered: &[usize],
    selected: Option<usize>,
) -> ListLayout {
    if area.height == 0 {
        return ListLayout::default();
    }

    let count_area = Rect::new(area.x, area.y, area.width, 1);
    let counter = format!("{} of {} instances", filtered.len(), records.len());
    Paragraph::new(Line::from(counter.dim())).render(count_area, buf);

    let rows_area = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    let max_rows = rows_area.height as usize;
    let count = filtered.len();
    let mut start = 0usize;
    if count > max_rows && max_rows > 0 {
        let selected = selected.unwrap_or(0);
        let half = max_rows / 2;
        if selected > half {
            start = (selected - half).min(count - max_rows);
        }
    }

    for (visible_idx, record_idx) in filtered.iter().enumerate().skip(start).take(max_rows) {
        let Some(record) = records.get(*record_idx) else {
            continue;
        };
        let y = rows_area.y + (visible_idx - start) as u16;
        let is_selected = selected == Some(visible_idx);
        let prefix: Span<'static> = if is_selected { "> ".bold() } else { "  ".into() };

        let mut line = Line::from(vec![prefix]);
        line.push_span(Span::from(record.repo.clone()).bold());
        line.push_span(Span::from(" "));
        line.push_span(Span::from(short_id(&record.instance_id)));
        line.push_span(Span::from(" "));
        line.push_span(lang_badge(&record.repo_language));
        line.push_span(Span::from(" "));
        let preview_width = rows_area
            .width
            .saturating_sub(line.width() as u16)
            .saturating_sub(1) as usize;
        let preview = truncate_text(&problem_preview(&record.problem_statement), preview_width);
        line.push_span(preview.dim());
        if is_selected {
            line = line.reversed();
        }
        Paragraph::new(line).render(Rect::new(rows_area.x, y, rows_area.width, 1), buf);
    }

    ListLayout { rows_area, start }
}
