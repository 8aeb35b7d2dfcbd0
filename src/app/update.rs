// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every show request is tagged with the session's sequence number; download
//! completions whose tag is stale update the image cache but never the
//! screen, so rapid navigation cannot be overwritten by a slow fetch.

use super::{App, Message, Screen};
use crate::contact;
use crate::gallery::resolve::{self, Resolution};
use crate::gallery::session::{ShowAction, ShowRequest};
use crate::net;
use crate::ui::library;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::SwipeDirection;
use crate::ui::viewer;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Library(library::Message::OpenGallery(key)) => app.open_gallery(&key),
        Message::Library(library::Message::EmailPressed) => app.contact_email(),
        Message::Library(library::Message::CallPressed) => app.contact_call(),

        Message::Viewer(viewer::Message::Close) => {
            app.close_viewer();
            Task::none()
        }
        Message::Viewer(viewer::Message::Previous) => app.navigate(-1),
        Message::Viewer(viewer::Message::Next) => app.navigate(1),
        Message::Viewer(viewer::Message::Select(index)) => app.show_absolute(index as i64),

        Message::ProbeCompleted {
            base_path,
            resolution,
        } => app.probe_completed(base_path, resolution),
        Message::ImageLoaded { seq, url, result } => app.image_loaded(seq, url, result),
        Message::FallbackLoaded { seq, result } => app.fallback_loaded(seq, result),

        Message::MailerOpened(opened) => app.mailer_opened(opened),

        Message::PointerMoved(position) => {
            app.last_cursor = Some(position);
            Task::none()
        }
        Message::PointerPressed => {
            if let Some(position) = app.last_cursor {
                app.swipe.begin(position);
            }
            Task::none()
        }
        Message::PointerReleased => app.pointer_released(),

        Message::Notifications(notifications::Message::Dismiss(id)) => {
            app.notifications.dismiss(id);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.prune_expired(now);
            Task::none()
        }
    }
}

impl App {
    pub(super) fn open_gallery(&mut self, key: &str) -> Task<Message> {
        match self.session.open(key) {
            Some(request) => {
                self.screen = Screen::Gallery;
                self.viewer = viewer::State::new();
                self.run_show(request)
            }
            None => {
                // Unknown keys are ignored without surfacing an error.
                log::debug!("ignoring unknown gallery key {:?}", key);
                Task::none()
            }
        }
    }

    fn close_viewer(&mut self) {
        self.session.close();
        self.screen = Screen::Library;
        self.swipe.cancel();
        self.viewer = viewer::State::new();
    }

    fn navigate(&mut self, delta: i64) -> Task<Message> {
        match self.session.step(delta) {
            Some(request) => self.run_show(request),
            None => Task::none(),
        }
    }

    fn show_absolute(&mut self, raw: i64) -> Task<Message> {
        match self.session.show(raw) {
            Some(request) => self.run_show(request),
            None => Task::none(),
        }
    }

    /// Turns a show request into the matching side effect.
    fn run_show(&mut self, request: ShowRequest) -> Task<Message> {
        let ShowRequest {
            seq,
            base_path,
            action,
        } = request;

        match action {
            ShowAction::Display { url } => self.display_url(seq, url),
            ShowAction::Fallback => {
                self.viewer.reset();
                let client = self.client.clone();
                let candidates = self.client.candidates(&base_path);
                Task::perform(net::fetch_first(client, candidates), move |result| {
                    Message::FallbackLoaded { seq, result }
                })
            }
            ShowAction::Probe => {
                self.viewer.reset();
                let prober = self.client.clone();
                let candidates = self.client.candidates(&base_path);
                Task::perform(resolve::probe(prober, candidates), move |resolution| {
                    Message::ProbeCompleted {
                        base_path: base_path.clone(),
                        resolution,
                    }
                })
            }
            ShowAction::Wait => {
                // A probe for this base path is already in flight; its
                // completion re-plans against the cursor.
                self.viewer.reset();
                Task::none()
            }
        }
    }

    fn display_url(&mut self, seq: u64, url: String) -> Task<Message> {
        if let Some(image) = self.image_cache.get(&url) {
            self.viewer.show_image(image);
            return Task::none();
        }

        self.viewer.reset();
        let client = self.client.clone();
        let request_url = url.clone();
        Task::perform(
            async move { client.fetch_image(&request_url).await },
            move |result| Message::ImageLoaded {
                seq,
                url: url.clone(),
                result,
            },
        )
    }

    fn probe_completed(&mut self, base_path: String, resolution: Resolution) -> Task<Message> {
        let recorded = self.session.complete_probe(&base_path, resolution);
        log::debug!("resolved {:?} -> {:?}", base_path, recorded);

        // Only the item under the cursor refreshes the screen; completions
        // for items navigated away from have already done their job by
        // populating the cache.
        if self.session.current_base() == Some(base_path.as_str()) {
            if let Some(request) = self.session.replan_current() {
                return self.run_show(request);
            }
        }
        Task::none()
    }

    fn image_loaded(
        &mut self,
        seq: u64,
        url: String,
        result: Result<crate::media::ImageData, crate::error::Error>,
    ) -> Task<Message> {
        match result {
            Ok(image) => {
                self.image_cache.insert(url, image.clone());
                if self.session.is_open() && self.session.is_current(seq) {
                    self.viewer.show_image(image);
                } else {
                    log::debug!("discarding stale image result (seq {})", seq);
                }
            }
            Err(err) => {
                log::warn!("image download failed for {}: {}", url, err);
                if self.session.is_open() && self.session.is_current(seq) {
                    self.viewer.show_missing();
                }
            }
        }
        Task::none()
    }

    fn fallback_loaded(
        &mut self,
        seq: u64,
        result: Result<(String, crate::media::ImageData), crate::error::Error>,
    ) -> Task<Message> {
        match result {
            Ok((url, image)) => {
                self.image_cache.insert(url, image.clone());
                if self.session.is_open() && self.session.is_current(seq) {
                    self.viewer.show_image(image);
                }
            }
            Err(err) => {
                log::debug!("fallback chain exhausted: {}", err);
                if self.session.is_open() && self.session.is_current(seq) {
                    self.viewer.show_missing();
                }
            }
        }
        Task::none()
    }

    fn pointer_released(&mut self) -> Task<Message> {
        let Some(position) = self.last_cursor else {
            self.swipe.cancel();
            return Task::none();
        };
        match self.swipe.finish(position) {
            Some(SwipeDirection::Next) => self.navigate(1),
            Some(SwipeDirection::Previous) => self.navigate(-1),
            None => Task::none(),
        }
    }

    fn contact_email(&mut self) -> Task<Message> {
        let Some(address) = self.config.contact.email.clone() else {
            return Task::none();
        };
        let url = contact::mailto_url(&address, self.config.contact.subject.as_deref());
        Task::perform(
            async move { open::that_detached(url).is_ok() },
            Message::MailerOpened,
        )
    }

    fn mailer_opened(&mut self, opened: bool) -> Task<Message> {
        if opened {
            return Task::none();
        }
        let Some(address) = self.config.contact.email.clone() else {
            return Task::none();
        };
        self.notifications
            .push(Notification::warning("toast-mailer-failed"));
        iced::clipboard::write(address)
    }

    fn contact_call(&mut self) -> Task<Message> {
        let Some(number) = self.config.contact.phone.clone() else {
            return Task::none();
        };
        self.notifications.push(
            Notification::success("toast-copied-phone").with_arg("number", number.clone()),
        );
        iced::clipboard::write(number)
    }
}
