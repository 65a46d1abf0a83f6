//! Browse application: terminal setup and the main loop.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::{debug, info};

use super::event_handler::{handle_key_event, KeyEventResult};
use super::renderer::{
    render_category_panel, render_detail, render_footer, render_header, render_page_footer,
    render_playground, render_results, render_search_bar, PANEL_HEIGHT,
};
use super::state::{BrowseState, Tab};
use crate::commands::AppContext;
use crate::search::paginate;

/// Poll timeout for the event loop.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct BrowseApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    running: Arc<AtomicBool>,
    state: BrowseState,
    spinner_frame: usize,
    /// Flag to prevent double cleanup in Drop.
    cleaned_up: bool,
}

impl BrowseApp {
    pub fn new(ctx: AppContext) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        crate::utils::install_terminal_panic_hook();

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self {
            terminal,
            running: Arc::new(AtomicBool::new(true)),
            state: BrowseState::new(ctx),
            spinner_frame: 0,
            cleaned_up: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let running = self.running.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
            // Drop does not run on process exit.
            crate::utils::restore_terminal();
            std::process::exit(0);
        })
        .context("Failed to set Ctrl+C handler")?;

        info!(items = self.state.ctx.store.len(), "browse started");
        let result = self.run_event_loop();
        self.cleanup_terminal();
        info!(runs = self.state.playground.history().len(), "browse finished");

        result
    }

    fn run_event_loop(&mut self) -> Result<()> {
        while self.running.load(Ordering::SeqCst) {
            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        debug!(code = ?key.code, "key");
                        match handle_key_event(key.code, key.modifiers, &mut self.state) {
                            KeyEventResult::Exit => break,
                            KeyEventResult::Continue => {}
                        }
                    }
                }
            }

            self.state.poll_execution();
            self.spinner_frame = (self.spinner_frame + 1) % 10;

            self.render()?;
        }

        Ok(())
    }

    fn cleanup_terminal(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }

    fn render(&mut self) -> Result<()> {
        let spinner = self.spinner_char();
        let state = &self.state;

        self.terminal.draw(|frame| {
            let area = frame.area();

            let detail = state.tab == Tab::Knowledge && state.selected_item().is_some();
            if state.tab == Tab::Playground || detail {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Min(6),
                        Constraint::Length(1),
                    ])
                    .split(area);

                render_header(frame, chunks[0], state);
                match state.selected_item() {
                    Some(item) if state.tab == Tab::Knowledge => {
                        render_detail(frame, chunks[1], item, state.detail_scroll);
                    }
                    _ => render_playground(frame, chunks[1], state, spinner),
                }
                render_footer(frame, chunks[2], state);
                return;
            }

            let filtered = state.filtered();
            let page = paginate(&filtered, state.view.page, state.ctx.config.page_size);
            let panel = state.panel();
            let panel_height = if panel.is_some() { PANEL_HEIGHT } else { 0 };

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(4),
                    Constraint::Min(6),
                    Constraint::Length(1),
                    Constraint::Length(panel_height),
                    Constraint::Length(1),
                ])
                .split(area);

            render_header(frame, chunks[0], state);
            render_search_bar(frame, chunks[1], state);
            render_results(frame, chunks[2], state, &page);
            render_page_footer(frame, chunks[3], &page);
            if let Some(counts) = &panel {
                render_category_panel(frame, chunks[4], counts);
            }
            render_footer(frame, chunks[5], state);
        })?;

        Ok(())
    }

    fn spinner_char(&self) -> char {
        const SPINNER: [char; 10] = [
            '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}',
            '\u{2827}', '\u{2807}', '\u{280F}',
        ];
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

impl Drop for BrowseApp {
    fn drop(&mut self) {
        self.cleanup_terminal();
    }
}
