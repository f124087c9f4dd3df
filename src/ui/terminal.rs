use crate::app::{App, AppMode, ServiceMessage};
use crate::ui::keymap::key_to_app_event;
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Run until the user quits.
    ///
    /// Each pass applies finished service calls, redraws, then waits up to
    /// `tick` for a key. Service calls run on the tokio runtime, so waiting
    /// here never holds up a response.
    pub fn run_event_loop(
        &mut self,
        app: &mut App,
        messages: &mut UnboundedReceiver<ServiceMessage>,
        tick: Duration,
    ) -> io::Result<()> {
        loop {
            while let Ok(message) = messages.try_recv() {
                app.handle_message(message);
            }

            if app.mode() == AppMode::Quit {
                info!("Quit requested");
                return Ok(());
            }

            let max_scroll = self.render_frame(app)?;
            app.clamp_results_scroll(max_scroll);

            // Propagate I/O errors instead of ignoring them
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_event(key_to_app_event(app.mode(), key));
                    }
                }
            }
        }
    }

    /// Returns the largest results scroll offset the frame can use.
    pub fn render_frame(&mut self, app: &App) -> io::Result<u16> {
        let render_state = app.get_render_state();
        let mut max_scroll = 0;
        self.terminal.draw(|frame| max_scroll = draw(frame, &render_state))?;
        Ok(max_scroll)
    }
}
