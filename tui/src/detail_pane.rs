use deepdive_core::TaskRecord;
use deepdive_core::classify_patch;
use deepdive_core::commit_url;
use deepdive_core::short_id;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::app::DetailTab;
use crate::badge::lang_badge;
use crate::diff_view::styled_diff_line;

const HEADER_ROWS: u16 = 4;

/// Dimensions of the last-rendered detail body, used by the caller to
/// clamp scrolling to the last visible window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DetailLayout {
    pub body_len: usize,
    pub view_rows: usize,
}

/// Renders the detail pane for the selected record. With no selection
/// only the empty-state placeholder is drawn.
pub(crate) fn render_detail(
    area: Rect,
    buf: &mut Buffer,
    record: Option<&TaskRecord>,
    active_tab: DetailTab,
    scroll: usize,
) -> DetailLayout {
    let Some(record) = record else {
        if area.height > 0 {
            Paragraph::new(Line::from("Select an instance to view details".dim()))
                .render(Rect::new(area.x, area.y, area.width, 1), buf);
        }
        return DetailLayout::default();
    };

    render_header(area, buf, record);

    if area.height <= HEADER_ROWS + 1 {
        return DetailLayout::default();
    }
    let tab_area = Rect::new(area.x, area.y + HEADER_ROWS, area.width, 1);
    render_tab_row(tab_area, buf, active_tab);

    let body_area = Rect::new(
        area.x,
        area.y + HEADER_ROWS + 1,
        area.width,
        area.height - HEADER_ROWS - 1,
    );
    let lines = tab_body(record, active_tab);
    render_scrolled(body_area, buf, &lines, scroll);
    DetailLayout {
        body_len: lines.len(),
        view_rows: body_area.height as usize,
    }
}

fn render_header(area: Rect, buf: &mut Buffer, record: &TaskRecord) {
    let title = format!("{} — {}", record.repo, short_id(&record.instance_id));
    Paragraph::new(Line::from(title.bold())).render(Rect::new(area.x, area.y, area.width, 1), buf);
    if area.height < 2 {
        return;
    }

    let commit_short: String = record.base_commit.chars().take(10).collect();
    let mut meta = Line::from(vec![lang_badge(&record.repo_language)]);
    meta.push_span(Span::from("  Commit: "));
    meta.push_span(Span::from(commit_short).underlined());
    meta.push_span(Span::from(format!("  {}", commit_url(record))).dim());
    Paragraph::new(meta).render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    if area.height < 3 {
        return;
    }

    Paragraph::new(Line::from(vec![
        Span::from("Instance: "),
        Span::from(record.instance_id.clone()).dim(),
    ]))
    .render(Rect::new(area.x, area.y + 2, area.width, 1), buf);
    if area.height < 4 {
        return;
    }

    let mut tags = Line::default();
    for tag in &record.issue_specificity {
        tags.push_span(Span::from(format!("({tag}) ")).cyan());
    }
    for tag in &record.issue_categories {
        tags.push_span(Span::from(format!("({tag}) ")).magenta());
    }
    Paragraph::new(tags).render(Rect::new(area.x, area.y + 3, area.width, 1), buf);
}

fn render_tab_row(area: Rect, buf: &mut Buffer, active_tab: DetailTab) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (idx, tab) in DetailTab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(" - ".into());
        }
        if *tab == active_tab {
            spans.push(format!("[{}]", tab.label()).bold());
        } else {
            spans.push(tab.label().to_lowercase().dim());
        }
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn render_scrolled(area: Rect, buf: &mut Buffer, lines: &[Line<'static>], scroll: usize) {
    let max_visible = area.height as usize;
    if max_visible == 0 {
        return;
    }
    let mut start = scroll.min(lines.len().saturating_sub(1));
    if lines.len() > max_visible {
        start = start.min(lines.len() - max_visible);
    } else {
        start = 0;
    }
    for (idx, line) in lines.iter().enumerate().skip(start).take(max_visible) {
        let y = area.y + idx.saturating_sub(start) as u16;
        Paragraph::new(line.clone()).render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

fn tab_body(record: &TaskRecord, active_tab: DetailTab) -> Vec<Line<'static>> {
    match active_tab {
        DetailTab::Problem => text_section("Problem Statement", &record.problem_statement),
        DetailTab::Requirements => text_section("Requirements", &record.requirements),
        DetailTab::Interface => text_section("Interface", &record.interface),
        DetailTab::Patch => patch_body(record),
        DetailTab::Tests => tests_body(record),
    }
}

/// Free-text tab: the field verbatim, or an "N/A" placeholder.
fn text_section(title: &str, text: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(title.to_string().bold()), Line::default()];
    if text.is_empty() {
        lines.push(Line::from("N/A".dim()));
    } else {
        lines.extend(text.split('\n').map(|l| Line::from(l.to_string())));
    }
    lines
}

fn patch_body(record: &TaskRecord) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Golden Patch".bold()), Line::default()];
    lines.extend(classify_patch(&record.patch).iter().map(styled_diff_line));
    if !record.test_patch.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from("Test Patch".bold()));
        lines.push(Line::default());
        lines.extend(classify_patch(&record.test_patch).iter().map(styled_diff_line));
    }
    lines
}

fn tests_body(record: &TaskRecord) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Selected Test Files".bold())];
    for file in &record.selected_test_files_to_run {
        lines.push(Line::from(format!("  {file}")));
    }

    lines.push(Line::default());
    lines.push(Line::from(
        format!("Fail to Pass ({})", record.fail_to_pass.len()).bold(),
    ));
    push_test_names(&mut lines, &record.fail_to_pass, Style::default().red());

    lines.push(Line::default());
    lines.push(Line::from(
        format!("Pass to Pass ({})", record.pass_to_pass.len()).bold(),
    ));
    push_test_names(&mut lines, &record.pass_to_pass, Style::default().green());

    lines
}

fn push_test_names(lines: &mut Vec<Line<'static>>, names: &[String], style: Style) {
    if names.is_empty() {
        lines.push(Line::from("None".dim()));
        return;
    }
    for name in names {
        lines.push(Line::from(Span::styled(format!("  {name}"), style)));
    }
}
