use std::{cell::RefCell, rc::Rc};

use arboard::Clipboard;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(arboard::Error),
    #[error("failed to write clipboard: {0}")]
    Write(arboard::Error),
}

/// Anything that can receive copied text.
pub trait TextClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard shared through the app context.
///
/// On X11 and Wayland the copied text is served by this process, so the
/// underlying `arboard::Clipboard` has to outlive the copy. The handle keeps
/// it open for the life of the app and reopens it if the first attempt failed.
#[derive(Clone)]
pub struct ClipboardHandle {
    inner: Rc<RefCell<Option<Clipboard>>>,
}

impl ClipboardHandle {
    pub fn open() -> Self {
        let clipboard = Clipboard::new()
            .map_err(|err| warn!(%err, "clipboard could not be opened"))
            .ok();
        Self {
            inner: Rc::new(RefCell::new(clipboard)),
        }
    }
}

impl TextClipboard for ClipboardHandle {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut slot = self.inner.borrow_mut();
        let clipboard = match slot.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|err| {
                warn!(%err, "clipboard could not be opened");
                ClipboardError::Unavailable(err)
            })?,
        };
        slot.insert(clipboard)
            .set_text(text.to_owned())
            .map_err(|err| {
                warn!(%err, "clipboard write failed");
                ClipboardError::Write(err)
            })
    }
}
