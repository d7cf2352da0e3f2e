//! Interactive list renderer.
//!
//! - The renderer owns UI state (selection, scroll offset, toast, hit map).
//! - Records arrive once over a channel from the background loader; until
//!   then the list shows a loading placeholder.
//! - Redraws happen when input changed something or when the expansion
//!   store's revision moved.

mod app;
mod ui;

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use grouplist_engine::ExpansionState;
use grouplist_store::LoadReport;
use ratatui::{Terminal, backend::CrosstermBackend};

use app::AppState;

pub struct TuiRenderer {
    state: AppState,
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(title: impl Into<String>, initial: ExpansionState, expand_all: bool) -> Self {
        Self {
            state: AppState::new(title.into(), initial, expand_all),
            tick_rate: Duration::from_millis(100),
        }
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.state = self.state.with_toast_duration(duration);
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn run(mut self, rx: Receiver<grouplist_store::Result<LoadReport>>) -> Result<()> {
        // Must run before raw mode; an error here returns with the terminal untouched
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<grouplist_store::Result<LoadReport>>,
    ) -> Result<()> {
        let mut pending = Some(rx);
        let mut dirty = true;
        let mut drawn_revision = self.state.expansion.revision();

        loop {
            if dirty || self.state.expansion.revision() != drawn_revision {
                terminal.draw(|f| ui::draw(f, &mut self.state))?;
                drawn_revision = self.state.expansion.revision();
                dirty = false;
            }

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => dirty |= self.state.handle_key(key),
                    Event::Mouse(mouse) => dirty |= self.state.handle_mouse(mouse),
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            if let Some(rx) = &pending {
                let received = match rx.try_recv() {
                    Ok(result) => Some(result),
                    Err(TryRecvError::Empty) => None,
                    Err(TryRecvError::Disconnected) => Some(Err(grouplist_store::Error::Io(
                        io::Error::new(
                            io::ErrorKind::BrokenPipe,
                            "loader stopped before sending records",
                        ),
                    ))),
                };
                if let Some(result) = received {
                    self.state.apply_load(result, Instant::now());
                    pending = None;
                    dirty = true;
                }
            }

            dirty |= self.state.tick(Instant::now());

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }
}
