//! Preview-source derivation and metadata probing.
//!
//! The preview pane's source is derived from the pasted URL by a pure
//! textual substitution: the `watch?v=` path segment becomes `embed/`. The
//! input is not validated; a malformed URL simply yields a source that
//! never loads, which the screen tolerates.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Path segment present in standard watch URLs.
const WATCH_SEGMENT: &str = "watch?v=";
/// Replacement segment producing the embeddable player URL.
const EMBED_SEGMENT: &str = "embed/";

/// oEmbed endpoint used to probe whether a pasted URL resolves to a video.
const OEMBED_URL: &str = "https://www.youtube.com/oembed";

/// Derives the preview-frame source from a watch URL.
///
/// Replaces the first `watch?v=` with `embed/`; a URL without that segment
/// is returned unchanged.
#[must_use]
pub fn embed_source(video_url: &str) -> String {
    video_url.replacen(WATCH_SEGMENT, EMBED_SEGMENT, 1)
}

/// Metadata returned by a successful preview probe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreviewInfo {
    /// Video title.
    pub title: String,
    /// Channel or uploader name.
    #[serde(rename = "author_name")]
    pub author: String,
}

/// Probes the oEmbed endpoint for the pasted URL.
///
/// A successful probe is the terminal stand-in for the preview frame
/// signaling that it loaded. Malformed or unknown URLs come back as an
/// [`Error::Preview`] and leave the preview unloaded.
///
/// # Errors
/// Returns an error on transport failure, a non-success status, or an
/// unparseable response body.
pub async fn probe(http: &reqwest::Client, video_url: &str) -> Result<PreviewInfo> {
    let response = http
        .get(OEMBED_URL)
        .query(&[("url", video_url), ("format", "json")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Preview(format!(
            "no embeddable video at {video_url} (status {})",
            response.status()
        )));
    }

    let info = response.json::<PreviewInfo>().await?;
    log::debug!("preview probe ok: {:?} by {:?}", info.title, info.author);
    Ok(info)
}
