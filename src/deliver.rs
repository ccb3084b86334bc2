//! File delivery abstraction for testability.
//!
//! The browser original triggers a save-as interaction with a fixed
//! filename; here the equivalent is writing the payload into the configured
//! download directory, behind a trait so the screen logic can be exercised
//! without touching the real file system.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::fetch::MediaPayload;

/// Fixed output filename, regardless of content type or source name.
pub const VIDEO_FILE_NAME: &str = "video.mp4";

/// Abstraction over materializing a downloaded payload on disk.
#[async_trait]
pub trait FileDelivery: Send + Sync {
    /// Writes the payload under `dir` and returns the path written.
    async fn save(&self, dir: &Path, payload: &MediaPayload) -> std::io::Result<PathBuf>;
}

/// Default file delivery using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileDelivery;

impl TokioFileDelivery {
    /// Creates a new `TokioFileDelivery` instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileDelivery for TokioFileDelivery {
    async fn save(&self, dir: &Path, payload: &MediaPayload) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(VIDEO_FILE_NAME);
        tokio::fs::write(&path, &payload.body).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use tempfile::TempDir;

    fn payload(body: &'static [u8]) -> MediaPayload {
        MediaPayload {
            content_type: Some("video/mp4".to_string()),
            body: Bytes::from_static(body),
        }
    }

    #[tokio::test]
    async fn save_writes_fixed_filename() {
        let dir = TempDir::new().unwrap();
        let delivery = TokioFileDelivery::new();

        let path = delivery.save(dir.path(), &payload(b"abc")).await.unwrap();

        assert_eq!(path, dir.path().join("video.mp4"));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[tokio::test]
    async fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let delivery = TokioFileDelivery::new();

        let path = delivery.save(&nested, &payload(b"x")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn save_overwrites_previous_download() {
        let dir = TempDir::new().unwrap();
        let delivery = TokioFileDelivery::new();

        delivery.save(dir.path(), &payload(b"first")).await.unwrap();
        let path = delivery.save(dir.path(), &payload(b"second")).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
