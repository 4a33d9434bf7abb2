//! Terminal front end for the deepdive instance browser: a searchable
//! list of benchmark task instances on the left, a tabbed detail view
//! on the right, vim-style navigation throughout.

use std::io::Stdout;
use std::io::stdout;
use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use deepdive_core::Dataset;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

mod app;
mod badge;
mod detail_pane;
mod diff_view;
mod list_pane;
mod text_formatting;

use app::App;

/// How long the event loop may sleep when no debounce is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Loads the dataset and runs the browser until the user quits. The
/// dataset must exist before the terminal is touched; load failures
/// surface as plain reports on the main screen.
pub fn run_main(dataset_path: &Path) -> Result<()> {
    let dataset = Dataset::load(dataset_path)
        .wrap_err_with(|| format!("could not load dataset {}", dataset_path.display()))?;
    info!(
        instances = dataset.records().len(),
        repos = dataset.repos().len(),
        "dataset loaded"
    );

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, App::new(dataset));
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Single-threaded loop: draw, then block on input with a timeout equal
/// to the pending search-debounce deadline (or an idle poll). This is
/// the only suspension point in the program.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
) -> Result<()> {
    while !app.is_done() {
        app.handle_tick(Instant::now());
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        let timeout = app.poll_timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key_event)
                if matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
            {
                app.handle_key(key_event);
            }
            Event::Mouse(mouse_event) => app.handle_mouse(mouse_event),
            _ => {}
        }
    }
    Ok(())
}
