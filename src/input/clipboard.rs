use super::InputError;

/// Read text from the system clipboard for pasting into the input buffer.
pub fn read_text() -> Result<String, InputError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| InputError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| InputError::Clipboard(e.to_string()))?;
    normalize(&text)
}

/// Strip the trailing newline terminals add to copied lines; inner line
/// breaks become `\n`.
pub fn normalize(text: &str) -> Result<String, InputError> {
    let text = text.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        return Err(InputError::EmptyClipboard);
    }
    Ok(text.replace("\r\n", "\n"))
}
