//! Background task management and event handling.

use std::path::Path;
use std::sync::Arc;

use crate::deliver::FileDelivery;
use crate::fetch::MediaPayload;
use crate::format::format_bytes;
use crate::preview;

use super::app::{App, Notice};
use super::event::AppEvent;

/// Spawns a preview probe for the current field value.
///
/// Called after every edit, mirroring the preview frame reloading as the
/// user types. Results come back as [`AppEvent::PreviewLoaded`] or
/// [`AppEvent::PreviewFailed`]; there is no staleness check, the first
/// success latches the loaded flag.
pub fn start_preview(app: &App) {
    let url = app.video_url().to_string();
    if url.is_empty() {
        return;
    }

    let http = app.fetcher.http().clone();
    let tx = app.event_tx.clone();
    tokio::spawn(async move {
        let event = match preview::probe(&http, &url).await {
            Ok(info) => AppEvent::PreviewLoaded(info),
            Err(e) => AppEvent::PreviewFailed(e.to_string()),
        };
        let _ = tx.send(event);
    });
}

/// Issues the download request for the current field value.
///
/// The in-flight flag is set synchronously before the task is spawned and
/// cleared in the completion handler, so every re-render brackets the
/// request with a consistent flag. Once issued the request cannot be
/// aborted; a late result is still applied.
pub fn start_download(app: &mut App) {
    app.in_flight = true;
    app.status = "Downloading...".to_string();

    let url = app.video_url().to_string();
    let fetcher = Arc::clone(&app.fetcher);
    let delivery = Arc::clone(&app.delivery);
    let dir = app.config.paths.download_dir.clone();
    let tx = app.event_tx.clone();

    tokio::spawn(async move {
        let outcome = fetcher.fetch(&url).await;
        let event = deliver_outcome(outcome, delivery.as_ref(), &dir).await;
        let _ = tx.send(event);
    });
}

/// Settles a finished request into its event.
///
/// The payload only reaches the file system when the fetch succeeded; a
/// transport or HTTP error settles straight into a failure event.
async fn deliver_outcome(
    outcome: crate::Result<MediaPayload>,
    delivery: &dyn FileDelivery,
    dir: &Path,
) -> AppEvent {
    match outcome {
        Ok(payload) => match delivery.save(dir, &payload).await {
            Ok(path) => AppEvent::DownloadSaved {
                path,
                bytes: payload.len(),
            },
            Err(e) => AppEvent::DownloadFailed(format!("could not save file: {e}")),
        },
        Err(e) => AppEvent::DownloadFailed(e.to_string()),
    }
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::PreviewLoaded(info) => {
            if !app.preview_loaded {
                log::info!("preview loaded: {}", info.title);
                app.preview_loaded = true;
            }
            app.preview = Some(info);
            app.preview_error = None;
            app.status = "Preview loaded".to_string();
        }
        AppEvent::PreviewFailed(error) => {
            log::debug!("preview probe failed: {error}");
            app.preview_error = Some(error);
        }
        AppEvent::DownloadSaved { path, bytes } => {
            log::info!("download saved: {} ({})", path.display(), format_bytes(bytes));
            app.in_flight = false;
            app.status = format!("Saved {} ({})", path.display(), format_bytes(bytes));
            app.push_notice(Notice::info("Download finished"));
        }
        AppEvent::DownloadFailed(error) => {
            log::error!("download failed: {error}");
            app.in_flight = false;
            app.status = "Download failed".to_string();
            app.push_notice(Notice::error(format!("Download failed: {error}")));
            app.push_notice(Notice::info("Download finished"));
        }
    }
}
