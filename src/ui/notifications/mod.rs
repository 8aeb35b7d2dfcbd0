// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Severity decides the accent color and auto-dismiss duration; errors stay
//! until dismissed by hand. A tick subscription drives expiry while any
//! toast is on screen.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Auto-dismiss duration; `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast to be displayed to the user. The message is an i18n key plus
/// interpolation arguments, resolved at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(&'static str, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.message_args.push((key, value.into()));
        self
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    fn is_expired(&self, now: Instant) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(duration) => now.duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Holds the active toasts in display order.
#[derive(Debug, Default)]
pub struct Manager {
    items: Vec<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id() != id);
    }

    /// Drops every toast whose auto-dismiss duration has elapsed.
    pub fn prune_expired(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Renders the toasts as a bottom-right overlay column.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    for notification in &manager.items {
        let text = i18n.tr_args(&notification.message_key, &notification.message_args);
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(text).size(typography::CAPTION).width(Length::Fill))
            .push(button(Text::new("×")).on_press(Message::Dismiss(notification.id())));

        column = column.push(
            Container::new(row)
                .width(Length::Fixed(sizing::TOAST_WIDTH))
                .padding(spacing::MD)
                .style(styles::toast(notification.severity().color())),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::success("test");
        let b = Notification::success("test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_outlives_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut manager = Manager::new();
        let keep = Notification::success("keep");
        let drop = Notification::success("drop");
        let drop_id = drop.id();
        manager.push(keep);
        manager.push(drop);

        manager.dismiss(drop_id);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn prune_drops_expired_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("old"));

        let later = Instant::now() + Duration::from_secs(10);
        manager.prune_expired(later);
        assert!(manager.is_empty());
    }

    #[test]
    fn prune_keeps_errors_forever() {
        let mut manager = Manager::new();
        manager.push(Notification::new(Severity::Error, "stuck"));

        let later = Instant::now() + Duration::from_secs(3600);
        manager.prune_expired(later);
        assert_eq!(manager.len(), 1);
    }
}
