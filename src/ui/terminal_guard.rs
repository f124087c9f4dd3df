use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, queue};
use std::io::{self, Write};
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Back to the main screen with a visible cursor.
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, terminal::LeaveAlternateScreen, cursor::Show)?;
    out.flush()
}

fn restore() {
    let _ = leave_screen(&mut io::stdout());
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            // Restore before the previous hook prints; the panic then unwinds
            // as usual instead of exiting from inside the hook.
            restore();
            tracing::error!("Panic: {}", panic_info);
            previous(panic_info);
        }));
    });
}
