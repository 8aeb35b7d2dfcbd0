// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and mouse events to semantic messages based on the
//! current screen. The gallery screen owns the shortcut set (Escape, arrow
//! keys) and the swipe gesture; the library screen listens to nothing.

use super::{App, Message, Screen};
use crate::ui::viewer;
use iced::event::{self, Event};
use iced::keyboard::{self, key};
use iced::{mouse, time, window, Subscription};
use std::time::Duration;

/// Tick period for toast expiry while any toast is visible.
const TOAST_TICK: Duration = Duration::from_millis(250);

pub(super) fn create(app: &App) -> Subscription<Message> {
    let events = match app.screen {
        Screen::Library => Subscription::none(),
        Screen::Gallery => event::listen_with(gallery_events),
    };

    let ticks = if app.notifications.is_empty() {
        Subscription::none()
    } else {
        time::every(TOAST_TICK).map(Message::Tick)
    };

    Subscription::batch([events, ticks])
}

/// Keyboard shortcuts and swipe tracking for the gallery screen.
///
/// Mouse presses already captured by a widget (thumbnails, close button) are
/// not swipe starts; cursor movement is tracked unconditionally so a press
/// on the image pane knows where it happened.
fn gallery_events(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => {
            if matches!(status, event::Status::Captured) {
                return None;
            }
            match named {
                key::Named::Escape => Some(Message::Viewer(viewer::Message::Close)),
                key::Named::ArrowLeft => Some(Message::Viewer(viewer::Message::Previous)),
                key::Named::ArrowRight => Some(Message::Viewer(viewer::Message::Next)),
                _ => None,
            }
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if matches!(status, event::Status::Captured) {
                None
            } else {
                Some(Message::PointerPressed)
            }
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}
