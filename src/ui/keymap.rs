//! Key bindings for the studio workspace
//!
//! Editing mode:
//! - printable keys → append to the input
//! - `Enter` → parse, `Alt+Enter` → new line, `Tab` → examples panel
//! - `PgUp`/`PgDn` → scroll results (both modes)
//! - `Ctrl+U` → clear, `Ctrl+V` → paste, `Backspace` → delete
//! - `Esc` / `Ctrl+C` → quit
//!
//! Examples mode:
//! - `Up`/`Down` (or `k`/`j`) → move selection, `Enter` → use example
//! - `Tab` / `Esc` → back to editing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppEvent, AppMode};

pub const HELP_EDITING: &str = "[Enter] Parse  [Alt+Enter] New line  [Tab] Examples  \
     [PgUp/PgDn] Scroll  [Ctrl+U] Clear  [Ctrl+V] Paste  [Esc] Quit";
pub const HELP_EXAMPLES: &str =
    "[↑/↓] Select  [Enter] Use example  [Tab/Esc] Back  [PgUp/PgDn] Scroll";

pub fn key_to_app_event(mode: AppMode, key: KeyEvent) -> AppEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }
    match key.code {
        KeyCode::PageUp => return AppEvent::ScrollResultsUp,
        KeyCode::PageDown => return AppEvent::ScrollResultsDown,
        _ => {}
    }

    match mode {
        AppMode::Editing => match key.code {
            KeyCode::Enter if alt => AppEvent::InsertChar('\n'),
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Tab => AppEvent::ToggleExamples,
            KeyCode::Esc => AppEvent::Quit,
            KeyCode::Backspace => AppEvent::DeleteBackward,
            KeyCode::Char('u') if ctrl => AppEvent::Clear,
            KeyCode::Char('v') if ctrl => AppEvent::PasteClipboard,
            KeyCode::Char(_) if ctrl => AppEvent::None,
            KeyCode::Char(c) => AppEvent::InsertChar(c),
            _ => AppEvent::None,
        },
        AppMode::Examples => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPreviousExample,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNextExample,
            KeyCode::Enter => AppEvent::PickSelectedExample,
            KeyCode::Tab | KeyCode::Esc => AppEvent::ToggleExamples,
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}

pub fn help_line(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Examples => HELP_EXAMPLES,
        _ => HELP_EDITING,
    }
}
