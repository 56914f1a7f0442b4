//! Clipboard access for copying the displayed amount.
//!
//! On Linux, external tools are tried first (`wl-copy`, `xclip`, `xsel`)
//! because they keep the content after the application exits. Everything
//! else goes through `arboard`.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// External tools tried in order on Linux.
#[cfg(target_os = "linux")]
const LINUX_TOOLS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Cross-platform clipboard manager.
#[derive(Debug, Clone, Default)]
pub struct ClipboardManager;

impl ClipboardManager {
    /// Creates a manager that prefers external tools where they exist.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if LINUX_TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            return Ok(());
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    /// Pipes `text` into `tool`, returning whether it succeeded.
    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        let copied = child.wait().map(|s| s.success()).unwrap_or(false);
        if copied {
            tracing::debug!("copied with {tool}");
        }
        copied
    }
}
