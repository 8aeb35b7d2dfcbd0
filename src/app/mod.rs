// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the library and the
//! gallery viewer.
//!
//! The `App` struct wires together the gallery session, the HTTP asset
//! client, localization, and the toast manager, and translates messages into
//! side effects like existence probes and image downloads. Policy decisions
//! (window sizing, startup gallery, stale-result handling) stay close to the
//! update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::{Catalog, GallerySession};
use crate::i18n::I18n;
use crate::media::ImageCache;
use crate::net::AssetClient;
use crate::ui::notifications;
use crate::ui::state::SwipeState;
use crate::ui::viewer;
use iced::{Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Which screen owns the window. `Gallery` corresponds to the viewer being
/// open; closing it always returns to `Library`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Library,
    Gallery,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    session: GallerySession,
    client: AssetClient,
    image_cache: ImageCache,
    viewer: viewer::State,
    swipe: SwipeState,
    last_cursor: Option<Point>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("galleries", &self.session.catalog().len())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally opens a gallery named on
    /// the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let config = config::load(config_dir.as_deref());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let session = GallerySession::new(Catalog::from_table(&config.gallery_table()));
        let client = AssetClient::new(config.base_url());

        let mut app = App {
            i18n,
            config,
            screen: Screen::Library,
            session,
            client,
            image_cache: ImageCache::with_defaults(),
            viewer: viewer::State::new(),
            swipe: SwipeState::default(),
            last_cursor: None,
            notifications: notifications::Manager::new(),
        };

        let task = match flags.gallery.as_deref() {
            Some(key) => app.open_gallery(key),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.session.active_gallery() {
            Some(gallery) => format!("{} - {}", self.i18n.tr("window-title"), gallery.title()),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }
}
