// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::resolve::Resolution;
use crate::media::ImageData;
use crate::ui::library;
use crate::ui::notifications;
use crate::ui::viewer;
use iced::Point;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Library(library::Message),
    Viewer(viewer::Message),
    Notifications(notifications::Message),
    /// An existence probe finished for `base_path`. Not sequence-gated: the
    /// resolution cache is write-once per key, so late completions only
    /// matter for display, which is re-planned against the current cursor.
    ProbeCompleted {
        base_path: String,
        resolution: Resolution,
    },
    /// A direct image download finished.
    ImageLoaded {
        seq: u64,
        url: String,
        result: Result<ImageData, Error>,
    },
    /// The load-based fallback chain finished.
    FallbackLoaded {
        seq: u64,
        result: Result<(String, ImageData), Error>,
    },
    /// Whether the platform opener accepted the mailto URL.
    MailerOpened(bool),
    /// Cursor tracking for the swipe gesture.
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FOLIO_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional gallery key to open on startup.
    pub gallery: Option<String>,
}
