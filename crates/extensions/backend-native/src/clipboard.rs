//! Clipboard through arboard.

use std::sync::Arc;

use arboard::Clipboard as Board;
use async_trait::async_trait;
use deskhands_protocols::{BackendError, Clipboard};
use parking_lot::Mutex;

use crate::run_blocking;

/// System clipboard.
///
/// The arboard handle is opened on first use and kept: on X11 the pasted text
/// only stays available while its owner is alive.
#[derive(Default, Clone)]
pub struct NativeClipboard {
    board: Arc<Mutex<Option<Board>>>,
}

impl NativeClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Clipboard for NativeClipboard {
    async fn set_text(&self, text: &str) -> Result<(), BackendError> {
        let board = self.board.clone();
        let text = text.to_string();
        run_blocking(BackendError::Clipboard, move || {
            let mut guard = board.lock();
            let board = match guard.take() {
                Some(board) => board,
                None => Board::new().map_err(|e| e.to_string())?,
            };
            let board = guard.insert(board);
            board.set_text(text).map_err(|e| e.to_string())
        })
        .await
    }
}
