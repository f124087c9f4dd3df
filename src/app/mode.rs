#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the input buffer
    Editing,
    /// Examples panel open and focused
    Examples,
    Quit,
}
