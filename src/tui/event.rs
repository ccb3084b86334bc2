//! Event types for the screen's event loop.

use std::path::PathBuf;

use crate::preview::PreviewInfo;

/// Events sent from spawned tasks back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The preview probe resolved the pasted URL to an embeddable video.
    PreviewLoaded(PreviewInfo),
    /// The preview probe failed for the current field value.
    PreviewFailed(String),
    /// The download settled successfully and the file was written.
    DownloadSaved {
        /// Path the payload was written to.
        path: PathBuf,
        /// Payload size in bytes.
        bytes: u64,
    },
    /// The download request or the file write failed.
    DownloadFailed(String),
}
