//! Download client for the remote conversion endpoint.

use std::time::Duration;

use bytes::Bytes;

use crate::config::EndpointConfig;
use crate::error::Result;

/// Fixed path on the remote endpoint that performs the download.
pub const DOWNLOAD_PATH: &str = "/youtube/download";

/// Binary payload returned by the download endpoint.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    /// Value of the response `Content-Type` header, when present.
    pub content_type: Option<String>,
    /// Raw response body.
    pub body: Bytes,
}

impl MediaPayload {
    /// Body length in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.body.len() as u64
    }

    /// Returns `true` for an empty body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// HTTP client bound to one download endpoint.
pub struct VideoFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl VideoFetcher {
    /// Builds a fetcher with a pooled HTTP client.
    ///
    /// # Errors
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(http, endpoint))
    }

    /// Builds a fetcher around an existing client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, endpoint: &EndpointConfig) -> Self {
        Self {
            http,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the underlying HTTP client, shared with the preview probe.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Full request URL for diagnostics.
    #[must_use]
    pub fn download_url(&self) -> String {
        format!("{}{DOWNLOAD_PATH}", self.base_url)
    }

    /// Issues the download request for one video URL.
    ///
    /// The field value is passed through as a single `url` query parameter,
    /// unvalidated; the endpoint owns all interpretation. A non-success
    /// status is an error, same as a transport failure.
    ///
    /// # Errors
    /// Returns an error on connection failure or a non-success HTTP status.
    pub async fn fetch(&self, video_url: &str) -> Result<MediaPayload> {
        let response = self
            .http
            .get(self.download_url())
            .query(&[("url", video_url)])
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = response.bytes().await?;
        log::info!(
            "download response: {} bytes, content-type {:?}",
            body.len(),
            content_type
        );

        Ok(MediaPayload { content_type, body })
    }
}
