//! Screen state model.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::deliver::{FileDelivery, TokioFileDelivery};
use crate::fetch::VideoFetcher;
use crate::form::FormState;
use crate::preview::PreviewInfo;

use super::event::AppEvent;

/// Name of the single form field holding the pasted URL.
pub const VIDEO_URL_FIELD: &str = "video_url";

/// How long a notice stays on screen before the loop expires it.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Visual intent of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    raised_at: Instant,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    /// Whether the notice has outlived its display window at `now`.
    #[must_use]
    pub fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= NOTICE_TTL
    }
}

pub struct App {
    pub form: FormState,
    /// Latched true on the first successful preview probe.
    pub preview_loaded: bool,
    /// Metadata from the most recent successful probe.
    pub preview: Option<PreviewInfo>,
    /// Last probe failure for the pane; cleared by the next success.
    pub preview_error: Option<String>,
    /// True from submit until the request settles, success or failure.
    pub in_flight: bool,
    pub notices: Vec<Notice>,
    pub status: String,
    pub should_quit: bool,
    pub config: AppConfig,
    pub fetcher: Arc<VideoFetcher>,
    pub delivery: Arc<dyn FileDelivery>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(
        config: AppConfig,
        fetcher: Arc<VideoFetcher>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            form: FormState::single(VIDEO_URL_FIELD, ""),
            preview_loaded: false,
            preview: None,
            preview_error: None,
            in_flight: false,
            notices: Vec::new(),
            status: String::new(),
            should_quit: false,
            config,
            fetcher,
            delivery: Arc::new(TokioFileDelivery::new()),
            event_tx,
        }
    }

    /// Current value of the URL field.
    #[must_use]
    pub fn video_url(&self) -> &str {
        self.form.value(VIDEO_URL_FIELD)
    }

    /// Whether the download action is currently enabled.
    ///
    /// The in-flight check is a UI-level debounce only; nothing below this
    /// layer enforces at-most-one request.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.video_url().is_empty() && self.preview_loaded && !self.in_flight
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drops notices whose display window has passed.
    pub fn expire_notices(&mut self, now: Instant) {
        self.notices.retain(|n| !n.expired_at(now));
    }
}

/// Builds an app wired to a throwaway event channel, for tests.
#[cfg(test)]
pub(crate) fn test_app() -> App {
    let (tx, _rx) = mpsc::unbounded_channel();
    let config = AppConfig::default();
    let fetcher = Arc::new(VideoFetcher::new(&config.endpoint).unwrap());
    App::new(config, fetcher, tx)
}
