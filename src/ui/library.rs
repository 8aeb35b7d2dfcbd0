// SPDX-License-Identifier: MPL-2.0
//! Library screen: gallery cards and the contact row.

use crate::config::ContactConfig;
use crate::gallery::{Catalog, Gallery};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Galleries per card row.
const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone)]
pub enum Message {
    OpenGallery(String),
    EmailPressed,
    CallPressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub contact: &'a ContactConfig,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("library-heading")).size(typography::HEADING);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(heading);

    if let Some(contact_row) = contact_row(ctx.i18n, ctx.contact) {
        content = content.push(contact_row);
    }

    let galleries: Vec<&Gallery> = ctx.catalog.iter().collect();
    for chunk in galleries.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for gallery in chunk {
            row = row.push(card(ctx.i18n, gallery));
        }
        content = content.push(row);
    }

    scrollable(content).into()
}

fn card<'a>(i18n: &'a I18n, gallery: &'a Gallery) -> Element<'a, Message> {
    let count_label = i18n.tr_args(
        "library-items-count",
        &[("count", gallery.len().to_string())],
    );

    let body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(gallery.title()).size(typography::TITLE))
        .push(Text::new(count_label).size(typography::CAPTION))
        .push(
            button(Text::new(i18n.tr("library-open-button")))
                .on_press(Message::OpenGallery(gallery.key().to_string())),
        );

    Container::new(body)
        .width(Length::FillPortion(1))
        .padding(spacing::MD)
        .style(styles::card)
        .into()
}

/// The contact row, or `None` when the config carries no contact details.
fn contact_row<'a>(i18n: &'a I18n, contact: &ContactConfig) -> Option<Element<'a, Message>> {
    if contact.email.is_none() && contact.phone.is_none() {
        return None;
    }

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if contact.email.is_some() {
        row = row.push(
            button(Text::new(i18n.tr("contact-email-button"))).on_press(Message::EmailPressed),
        );
    }
    if contact.phone.is_some() {
        row = row.push(
            button(Text::new(i18n.tr("contact-call-button"))).on_press(Message::CallPressed),
        );
    }

    Some(row.into())
}
