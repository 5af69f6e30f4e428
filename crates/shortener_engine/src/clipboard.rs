use std::sync::mpsc;
use std::thread;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

enum ClipboardCommand {
    SetText {
        text: String,
        hold: bool,
        reply: mpsc::Sender<Result<(), ClipboardError>>,
    },
}

/// System clipboard through `arboard`.
///
/// One `arboard::Clipboard` lives on a dedicated thread for as long as this
/// value exists. On X11 and Wayland the owning process serves the selection,
/// so contents written here stay pasteable until the handle is dropped.
pub struct ArboardClipboard {
    cmd_tx: mpsc::Sender<ClipboardCommand>,
}

impl ArboardClipboard {
    /// Opens the system clipboard. Headless sessions report `Unavailable`.
    pub fn new() -> Result<Self, ClipboardError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClipboardCommand>();
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut clipboard = match arboard::Clipboard::new() {
                    Ok(clipboard) => {
                        let _ = ready_tx.send(Ok(()));
                        clipboard
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(ClipboardError::Unavailable(err.to_string())));
                        return;
                    }
                };
                while let Ok(command) = cmd_rx.recv() {
                    let ClipboardCommand::SetText { text, hold, reply } = command;
                    let _ = reply.send(write_text(&mut clipboard, text, hold));
                }
            })
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;

        ready_rx
            .recv()
            .map_err(|_| ClipboardError::Unavailable("clipboard thread exited".into()))??;
        Ok(Self { cmd_tx })
    }

    /// Writes `text` and, on Linux, blocks until another application takes
    /// over the selection. Used before the process exits.
    pub fn set_text_and_hold(&self, text: &str) -> Result<(), ClipboardError> {
        self.request(text, true)
    }

    fn request(&self, text: &str, hold: bool) -> Result<(), ClipboardError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.cmd_tx
            .send(ClipboardCommand::SetText {
                text: text.to_owned(),
                hold,
                reply: reply_tx,
            })
            .map_err(|_| ClipboardError::Unavailable("clipboard thread stopped".into()))?;
        reply_rx
            .recv()
            .map_err(|_| ClipboardError::Unavailable("clipboard thread stopped".into()))?
    }
}

impl Clipboard for ArboardClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.request(text, false)
    }
}

#[cfg(target_os = "linux")]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: bool,
) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    let result = if hold {
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    };
    result.map_err(|err| ClipboardError::Write(err.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _hold: bool,
) -> Result<(), ClipboardError> {
    clipboard
        .set_text(text)
        .map_err(|err| ClipboardError::Write(err.to_string()))
}

/// Stand-in used when no system clipboard could be opened.
#[derive(Debug, Clone)]
pub struct NoClipboard {
    reason: String,
}

impl NoClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Clipboard for NoClipboard {
    fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clipboard_reports_reason() {
        let clipboard = NoClipboard::new("no display");
        assert_eq!(
            clipboard.set_text("x"),
            Err(ClipboardError::Unavailable("no display".into()))
        );
    }

    #[test]
    fn system_handle_serves_repeated_writes() {
        // Headless CI has no clipboard; there the constructor must fail cleanly.
        match ArboardClipboard::new() {
            Ok(clipboard) => {
                assert_eq!(clipboard.set_text("first"), Ok(()));
                assert_eq!(clipboard.set_text("second"), Ok(()));
            }
            Err(err) => assert!(matches!(err, ClipboardError::Unavailable(_))),
        }
    }
}
