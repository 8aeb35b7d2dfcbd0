// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch.

use super::{App, Message, Screen};
use crate::ui::{library, notifications, viewer};
use iced::widget::Stack;
use iced::Element;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Library => library::view(library::ViewContext {
            i18n: &app.i18n,
            catalog: app.session.catalog(),
            contact: &app.config.contact,
        })
        .map(Message::Library),
        Screen::Gallery => viewer::view(viewer::ViewContext {
            i18n: &app.i18n,
            session: &app.session,
            state: &app.viewer,
        })
        .map(Message::Viewer),
    };

    if app.notifications.is_empty() {
        screen
    } else {
        Stack::new()
            .push(screen)
            .push(notifications::view(&app.notifications, &app.i18n).map(Message::Notifications))
            .into()
    }
}
