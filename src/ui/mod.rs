pub mod keymap;
pub mod render;
pub mod studio;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use keymap::key_to_app_event;
pub use render::draw;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
