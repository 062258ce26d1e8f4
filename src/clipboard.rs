//! Clipboard integration for copying links
//!
//! Uses arboard for cross-platform clipboard access

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to clipboard")?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access, may fail in CI
    fn test_copy_link() {
        let url = "https://github.com/caiotbraga";
        copy(url).expect("Copy failed");

        let mut clipboard = Clipboard::new().expect("clipboard");
        assert_eq!(clipboard.get_text().expect("Paste failed"), url);
    }

    #[test]
    fn test_empty_copy() {
        // Should not touch the clipboard at all
        assert!(copy("").is_ok());
    }
}
