//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)
}

/// Text to put on the clipboard for a raw display value: the display text
/// without grouping, or `None` if it is not a finite number.
pub fn clipboard_text(display_text: &str) -> Option<String> {
    let value: f64 = display_text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(crate::calculator::render_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_text() {
        assert_eq!(clipboard_text("1234567"), Some("1234567".to_string()));
        assert_eq!(clipboard_text("5."), Some("5".to_string()));
        assert_eq!(clipboard_text("-0.25"), Some("-0.25".to_string()));
        assert_eq!(clipboard_text("inf"), None);
        assert_eq!(clipboard_text("."), None);
    }
}
