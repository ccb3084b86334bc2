//! vidgrab - paste a video URL, preview it, download it.
//!
//! This library holds the core pieces behind the terminal UI: a generic
//! reducer-backed form-state container, the preview-source derivation and
//! metadata probe, the download client, and a file-delivery abstraction for
//! materializing the response body on disk.
//!
//! # Example
//!
//! ```no_run
//! use vidgrab::{AppConfig, FormState, VideoFetcher};
//!
//! # async fn example() -> vidgrab::Result<()> {
//! let config = AppConfig::load()?;
//! let mut form = FormState::single("video_url", "");
//! form.handle_change("video_url", "https://youtube.com/watch?v=abc");
//!
//! let fetcher = VideoFetcher::new(&config.endpoint)?;
//! let payload = fetcher.fetch(form.value("video_url")).await?;
//! println!("got {} bytes", payload.body.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod deliver;
pub mod error;
pub mod fetch;
pub mod form;
pub mod format;
pub mod preview;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, EndpointConfig, PathConfig};
pub use deliver::{FileDelivery, TokioFileDelivery, VIDEO_FILE_NAME};
pub use error::{Error, Result};
pub use fetch::{MediaPayload, VideoFetcher};
pub use form::{FormState, Transition};
pub use format::format_bytes;
pub use preview::{PreviewInfo, embed_source};
