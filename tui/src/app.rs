use std::time::Duration;
use std::time::Instant;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use deepdive_core::Dataset;
use deepdive_core::FilterParams;
use deepdive_core::TaskRecord;
use deepdive_core::apply_filters;
use deepdive_core::commit_url;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use tracing::debug;

use crate::detail_pane::DetailLayout;
use crate::detail_pane::render_detail;
use crate::list_pane::ListLayout;
use crate::list_pane::render_list;

/// Keystrokes in the search box settle for this long before filters
/// re-apply; every further keystroke re-arms the timer.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

const DETAIL_PAGE: usize = 10;

const BROWSE_HINT: &str =
    "↑/↓/j/k navigate · / search · r repo · l language · ←/→ tabs · o open commit · q quit";
const SEARCH_HINT: &str = "type to search · Enter/Esc done";
const POPUP_HINT: &str = "↑/↓ select · Enter apply · Esc cancel";

/// Which of the five detail-body views is displayed. Deliberately NOT
/// reset when the selection changes; the last open tab stays open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DetailTab {
    Problem,
    Requirements,
    Interface,
    Patch,
    Tests,
}

impl DetailTab {
    pub(crate) const ALL: [DetailTab; 5] = [
        DetailTab::Problem,
        DetailTab::Requirements,
        DetailTab::Interface,
        DetailTab::Patch,
        DetailTab::Tests,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            DetailTab::Problem => "Problem Statement",
            DetailTab::Requirements => "Requirements",
            DetailTab::Interface => "Interface",
            DetailTab::Patch => "Gold Patch",
            DetailTab::Tests => "Tests",
        }
    }

    fn index(self) -> usize {
        match self {
            DetailTab::Problem => 0,
            DetailTab::Requirements => 1,
            DetailTab::Interface => 2,
            DetailTab::Patch => 3,
            DetailTab::Tests => 4,
        }
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Browse,
    Search,
    RepoPopup,
    LangPopup,
}

pub(crate) struct App {
    dataset: Dataset,
    filtered: Vec<usize>,
    selected: Option<usize>,
    active_tab: DetailTab,
    focus: Focus,
    search_input: String,
    repo_filter: Option<String>,
    language_filter: Option<String>,
    popup_index: usize,
    debounce_deadline: Option<Instant>,
    detail_scroll: usize,
    detail_layout: DetailLayout,
    list_layout: ListLayout,
    status_message: Option<String>,
    is_done: bool,
}

impl App {
    pub(crate) fn new(dataset: Dataset) -> Self {
        let filtered = (0..dataset.records().len()).collect();
        Self {
            dataset,
            filtered,
            selected: None,
            active_tab: DetailTab::Problem,
            focus: Focus::Browse,
            search_input: String::new(),
            repo_filter: None,
            language_filter: None,
            popup_index: 0,
            debounce_deadline: None,
            detail_scroll: 0,
            detail_layout: DetailLayout::default(),
            list_layout: ListLayout::default(),
            status_message: None,
            is_done: false,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.is_done
    }

    /// How long the event loop may block before the pending debounce
    /// must fire. `None` when no debounce is armed.
    pub(crate) fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.debounce_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fires the debounced filter re-application once its deadline has
    /// passed. Returns true when filters were re-applied.
    pub(crate) fn handle_tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.debounce_deadline
            && now >= deadline
        {
            self.debounce_deadline = None;
            self.reapply_filters();
            return true;
        }
        false
    }

    pub(crate) fn handle_key(&mut self, key_event: KeyEvent) {
        self.status_message = None;
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.is_done = true;
            return;
        }
        match self.focus {
            Focus::Browse => self.handle_browse_key(key_event),
            Focus::Search => self.handle_search_key(key_event),
            Focus::RepoPopup | Focus::LangPopup => self.handle_popup_key(key_event),
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse_event: MouseEvent) {
        if !matches!(
            mouse_event.kind,
            MouseEventKind::Down(MouseButton::Left)
        ) {
            return;
        }
        let ListLayout { rows_area, start } = self.list_layout;
        let inside = mouse_event.column >= rows_area.x
            && mouse_event.column < rows_area.right()
            && mouse_event.row >= rows_area.y
            && mouse_event.row < rows_area.bottom();
        if !inside {
            return;
        }
        let row = (mouse_event.row - rows_area.y) as usize;
        let idx = start + row;
        if idx < self.filtered.len() {
            self.select(Some(idx));
        }
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.is_done = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('r') => self.open_popup(Focus::RepoPopup),
            KeyCode::Char('l') => self.open_popup(Focus::LangPopup),
            KeyCode::Left => self.set_tab(self.active_tab.prev()),
            KeyCode::Right => self.set_tab(self.active_tab.next()),
            KeyCode::Char(ch @ '1'..='5') => {
                let idx = (ch as usize) - ('1' as usize);
                self.set_tab(DetailTab::ALL[idx]);
            }
            KeyCode::PageDown => self.adjust_detail_scroll(DETAIL_PAGE as isize),
            KeyCode::PageUp => self.adjust_detail_scroll(-(DETAIL_PAGE as isize)),
            KeyCode::Char('o') => self.open_selected_commit(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Browse,
            KeyCode::Backspace => {
                self.search_input.pop();
                self.arm_debounce();
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_input.clear();
                self.arm_debounce();
            }
            KeyCode::Char(ch) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_input.push(ch);
                self.arm_debounce();
            }
            _ => {}
        }
    }

    fn handle_popup_key(&mut self, key_event: KeyEvent) {
        // Index 0 is the "All" row; real entries follow it.
        let max_index = self.popup_entries().len();
        match key_event.code {
            KeyCode::Esc => self.focus = Focus::Browse,
            KeyCode::Down | KeyCode::Char('j') => {
                self.popup_index = (self.popup_index + 1).min(max_index);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.popup_index = self.popup_index.saturating_sub(1);
            }
            KeyCode::Enter => {
                let choice = if self.popup_index == 0 {
                    None
                } else {
                    self.popup_entries().get(self.popup_index - 1).cloned()
                };
                match self.focus {
                    Focus::RepoPopup => self.repo_filter = choice,
                    Focus::LangPopup => self.language_filter = choice,
                    Focus::Browse | Focus::Search => {}
                }
                self.focus = Focus::Browse;
                // Dropdown changes apply immediately, no debounce.
                self.reapply_filters();
            }
            _ => {}
        }
    }

    /// Entries behind the open filter popup, without the leading "All"
    /// row.
    fn popup_entries(&self) -> Vec<String> {
        match self.focus {
            Focus::RepoPopup => self.dataset.repos().to_vec(),
            Focus::LangPopup => self.dataset.languages().to_vec(),
            Focus::Browse | Focus::Search => Vec::new(),
        }
    }

    fn open_popup(&mut self, focus: Focus) {
        self.focus = focus;
        let current = match focus {
            Focus::RepoPopup => self.repo_filter.as_ref(),
            Focus::LangPopup => self.language_filter.as_ref(),
            Focus::Browse | Focus::Search => None,
        };
        self.popup_index = current
            .and_then(|value| self.popup_entries().iter().position(|e| e == value))
            .map_or(0, |pos| pos + 1);
    }

    fn arm_debounce(&mut self) {
        self.debounce_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    fn filter_params(&self) -> FilterParams {
        FilterParams {
            query: self.search_input.clone(),
            repo: self.repo_filter.clone(),
            language: self.language_filter.clone(),
        }
    }

    /// Recomputes the filtered view. Always clears the selection, even
    /// when the inputs produced the same subsequence.
    fn reapply_filters(&mut self) {
        let params = self.filter_params();
        self.filtered = apply_filters(self.dataset.records(), &params);
        debug!(matches = self.filtered.len(), "filters reapplied");
        self.select(None);
    }

    fn select(&mut self, selected: Option<usize>) {
        self.selected = selected;
        self.detail_scroll = 0;
    }

    fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(idx) => (idx + 1).min(self.filtered.len() - 1),
        };
        self.select(Some(next));
    }

    /// Moving up from the first row or from "nothing selected" is a
    /// no-op; it must never underflow into a selection.
    fn move_selection_up(&mut self) {
        if let Some(idx) = self.selected
            && idx > 0
        {
            self.select(Some(idx - 1));
        }
    }

    fn set_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
        self.detail_scroll = 0;
    }

    /// Scrolls by `delta` lines, stopping at the last window that still
    /// shows content. Overshooting past that window would make later
    /// scrolls in the other direction appear to do nothing.
    fn adjust_detail_scroll(&mut self, delta: isize) {
        let DetailLayout { body_len, view_rows } = self.detail_layout;
        let max = body_len.saturating_sub(view_rows);
        let next = self.detail_scroll as isize + delta;
        self.detail_scroll = next.clamp(0, max as isize) as usize;
    }

    fn selected_record(&self) -> Option<&TaskRecord> {
        let idx = self.selected?;
        let record_idx = *self.filtered.get(idx)?;
        self.dataset.records().get(record_idx)
    }

    fn open_selected_commit(&mut self) {
        let Some(record) = self.selected_record() else {
            self.status_message = Some("No instance selected".to_string());
            return;
        };
        let url = commit_url(record);
        match webbrowser::open(&url) {
            Ok(()) => self.status_message = Some(format!("Opened {url}")),
            Err(err) => self.status_message = Some(format!("Failed to open {url}: {err}")),
        }
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 {
            return;
        }
        let header_area = Rect::new(area.x, area.y, area.width, 1);
        self.render_header(header_area, buf);

        let main_area = Rect::new(area.x, area.y + 1, area.width, area.height - 2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(52), Constraint::Min(20)])
            .split(main_area);
        self.render_sidebar(columns[0], buf);
        self.detail_layout = render_detail(
            columns[1],
            buf,
            self.selected_record(),
            self.active_tab,
            self.detail_scroll,
        );

        let hint_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        self.render_hint(hint_area, buf);

        if matches!(self.focus, Focus::RepoPopup | Focus::LangPopup) {
            self.render_popup(area, buf);
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut line = Line::from("deepdive".bold());
        line.push_span(Span::from(format!(
            "  {} instances · {} repos · {} languages",
            self.dataset.records().len(),
            self.dataset.repos().len(),
            self.dataset.languages().len()
        )));
        Paragraph::new(line).render(area, buf);
    }

    fn render_sidebar(&mut self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }
        let search_area = Rect::new(area.x, area.y, area.width, 1);
        let mut search = Line::from(Span::from("Search: "));
        if self.search_input.is_empty() && self.focus != Focus::Search {
            search.push_span(Span::from("problem statements, repos, IDs…").dim());
        } else {
            search.push_span(Span::from(self.search_input.clone()));
        }
        if self.focus == Focus::Search {
            search.push_span(Span::from("▏").bold());
        }
        Paragraph::new(search).render(search_area, buf);

        let filters_area = Rect::new(area.x, area.y + 1, area.width, 1);
        let repo = self.repo_filter.as_deref().unwrap_or("all repos");
        let language = self.language_filter.as_deref().unwrap_or("all languages");
        Paragraph::new(Line::from(
            format!("repo: {repo} · language: {language}").dim(),
        ))
        .render(filters_area, buf);

        let list_area = Rect::new(area.x, area.y + 2, area.width, area.height - 2);
        self.list_layout = render_list(
            list_area,
            buf,
            self.dataset.records(),
            &self.filtered,
            self.selected,
        );
    }

    fn render_hint(&self, area: Rect, buf: &mut Buffer) {
        let hint = match self.focus {
            Focus::Browse => BROWSE_HINT,
            Focus::Search => SEARCH_HINT,
            Focus::RepoPopup | Focus::LangPopup => POPUP_HINT,
        };
        let mut line = Line::from(hint);
        if let Some(status) = &self.status_message {
            line.push_span(Span::raw("  ·  "));
            line.push_span(status.clone().dim());
        }
        Paragraph::new(line)
            .style(Style::default().dim())
            .render(area, buf);
    }

    fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let entries = self.popup_entries();
        let title = match self.focus {
            Focus::RepoPopup => format!("Repository ({})", entries.len()),
            Focus::LangPopup => format!("Language ({})", entries.len()),
            Focus::Browse | Focus::Search => return,
        };
        if area.width < 30 || area.height < 8 {
            return;
        }
        let wanted = u16::try_from(entries.len())
            .unwrap_or(u16::MAX)
            .saturating_add(3);
        let height = wanted.clamp(4, area.height - 2);
        let width = area.width.saturating_sub(8).clamp(20, 60);
        let popup = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );
        Clear.render(popup, buf);
        Paragraph::new(Line::from(title.bold()))
            .render(Rect::new(popup.x, popup.y, popup.width, 1), buf);

        let rows = popup.height.saturating_sub(1) as usize;
        // "All" sits at index 0, real entries follow.
        let labels: Vec<String> = std::iter::once("All".to_string()).chain(entries).collect();
        let mut start = 0usize;
        if labels.len() > rows && rows > 0 {
            let half = rows / 2;
            if self.popup_index > half {
                start = (self.popup_index - half).min(labels.len() - rows);
            }
        }
        for (idx, label) in labels.iter().enumerate().skip(start).take(rows) {
            let y = popup.y + 1 + (idx - start) as u16;
            let mut line = if idx == self.popup_index {
                Line::from(format!("> {label}").bold())
            } else {
                Line::from(format!("  {label}"))
            };
            if idx == self.popup_index {
                line = line.reversed();
            }
            Paragraph::new(line).render(Rect::new(popup.x, y, popup.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, repo: &str, language: &str, problem: &str) -> TaskRecord {
        TaskRecord {
            instance_id: id.to_string(),
            repo: repo.to_string(),
            repo_language: language.to_string(),
            problem_statement: problem.to_string(),
            ..Default::default()
        }
    }

    fn app() -> App {
        let dataset = Dataset::from_records(vec![
            record("id-1", "a/x", "python", "alpha problem"),
            record("id-2", "a/y", "go", "beta problem"),
            record("id-3", "a/x", "python", "gamma problem"),
        ])
        .expect("dataset");
        App::new(dataset)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn down_from_nothing_selects_first_row() {
        let mut app = app();
        assert_eq!(app.selected, None);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn down_clamps_at_last_row() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.selected, Some(2));
    }

    #[test]
    fn up_never_underflows() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected, None);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('k')));
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn search_keystrokes_arm_debounce_and_tick_fires_it() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('/')));
        for ch in "beta".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        // Not yet applied: the deadline has not passed.
        assert_eq!(app.filtered.len(), 3);
        assert!(app.poll_timeout(Instant::now()).is_some());

        let fired = app.handle_tick(Instant::now() + SEARCH_DEBOUNCE);
        assert!(fired);
        assert_eq!(app.filtered, vec![1]);
        // Filter application clears the selection.
        assert_eq!(app.selected, None);
        assert!(app.poll_timeout(Instant::now()).is_none());
    }

    #[test]
    fn tick_before_deadline_does_nothing() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('a')));
        let armed_at = Instant::now();
        assert!(!app.handle_tick(armed_at));
        assert_eq!(app.filtered.len(), 3);
    }

    #[test]
    fn repo_popup_applies_filter_immediately_and_resets_selection() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('r')));
        // Move to the first repo entry ("a/x") past the "All" row.
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.repo_filter.as_deref(), Some("a/x"));
        assert_eq!(app.filtered, vec![0, 2]);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn popup_all_entry_clears_filter() {
        let mut app = app();
        app.repo_filter = Some("a/x".to_string());
        app.reapply_filters();
        assert_eq!(app.filtered, vec![0, 2]);

        app.handle_key(key(KeyCode::Char('r')));
        // open_popup starts on the current choice; move back to "All".
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.repo_filter, None);
        assert_eq!(app.filtered, vec![0, 1, 2]);
    }

    #[test]
    fn language_filter_end_to_end() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('l')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        // Languages are sorted: "go" is first.
        assert_eq!(app.language_filter.as_deref(), Some("go"));
        assert_eq!(app.filtered, vec![1]);
    }

    #[test]
    fn active_tab_persists_across_selection_changes() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.active_tab, DetailTab::Requirements);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.active_tab, DetailTab::Requirements);
    }

    #[test]
    fn tab_keys_cycle_and_jump() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.active_tab, DetailTab::Tests);
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.active_tab, DetailTab::Patch);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.active_tab, DetailTab::Tests);
    }

    #[test]
    fn search_input_swallows_navigation_chars() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.selected, None);
        assert_eq!(app.search_input, "j");
    }

    #[test]
    fn escape_leaves_search_with_debounce_still_pending() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('z')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.is_done());
        assert!(app.poll_timeout(Instant::now()).is_some());

        assert!(app.handle_tick(Instant::now() + SEARCH_DEBOUNCE));
        assert_eq!(app.filtered.len(), 0);
    }

    #[test]
    fn quit_keys_finish_the_app() {
        let mut by_q = app();
        by_q.handle_key(key(KeyCode::Char('q')));
        assert!(by_q.is_done());

        let mut by_ctrl_c = app();
        let mut ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        ctrl_c.kind = crossterm::event::KeyEventKind::Press;
        by_ctrl_c.handle_key(ctrl_c);
        assert!(by_ctrl_c.is_done());
    }

    #[test]
    fn detail_scroll_stops_at_last_visible_window() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.detail_layout = DetailLayout {
            body_len: 50,
            view_rows: 10,
        };
        for _ in 0..10 {
            app.handle_key(key(KeyCode::PageDown));
        }
        assert_eq!(app.detail_scroll, 40);
        // One page up moves the window right away.
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.detail_scroll, 30);
    }

    #[test]
    fn short_detail_body_never_scrolls() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.detail_layout = DetailLayout {
            body_len: 5,
            view_rows: 10,
        };
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn popup_renders_inside_the_frame() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('r')));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Repository (2)"));
        assert!(text.contains("All"));
    }

    #[test]
    fn mouse_click_selects_visible_row() {
        let mut app = app();
        app.list_layout = ListLayout {
            rows_area: Rect::new(0, 3, 50, 10),
            start: 0,
        };
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn mouse_click_outside_rows_is_ignored() {
        let mut app = app();
        app.list_layout = ListLayout {
            rows_area: Rect::new(0, 3, 50, 2),
            start: 0,
        };
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 60,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn selection_reset_on_every_filter_application() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected, Some(1));
        app.reapply_filters();
        assert_eq!(app.selected, None);
    }
}
