// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer: header with title and counter, image pane with prev/next
//! overlays, and the numbered thumbnail strip.

pub mod state;

pub use state::{Display, State};

use crate::gallery::GallerySession;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Previous,
    Next,
    /// A thumbnail was pressed; 0-based item index.
    Select(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a GallerySession,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        session,
        state,
    } = ctx;
    let Some(gallery) = session.active_gallery() else {
        // The viewer is only mounted while a gallery is open.
        return Column::new().into();
    };
    let (position, total) = session.position().unwrap_or((1, gallery.len()));

    let counter = i18n.tr_args(
        "viewer-counter",
        &[
            ("position", position.to_string()),
            ("total", total.to_string()),
        ],
    );

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(format!("{} ({})", gallery.title(), total)).size(typography::TITLE),
        )
        .push(
            Container::new(Text::new(counter).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            button(Text::new(i18n.tr("viewer-close-button")))
                .style(styles::nav_overlay)
                .on_press(Message::Close),
        );

    let pane = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill)
        .push(nav_button(i18n.tr("viewer-previous-button"), Message::Previous))
        .push(image_pane(i18n, state))
        .push(nav_button(i18n.tr("viewer-next-button"), Message::Next));

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(pane)
        .push(thumb_strip(session))
        .into()
}

fn nav_button(label: String, message: Message) -> Element<'static, Message> {
    button(
        Text::new(label)
            .size(typography::HEADING)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
    .style(styles::nav_overlay)
    .on_press(message)
    .into()
}

fn image_pane<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &state.display {
        Display::Loading => Text::new(i18n.tr("viewer-loading"))
            .size(typography::BODY)
            .into(),
        Display::Image(image) => Image::new(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Display::Missing => Text::new(i18n.tr("viewer-missing"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// One numbered button per item, 1-indexed labels, current item highlighted.
fn thumb_strip(session: &GallerySession) -> Element<'_, Message> {
    let Some(gallery) = session.active_gallery() else {
        return Row::new().into();
    };
    let current = session.index().unwrap_or(0);

    let mut strip = Row::new().spacing(spacing::XS);
    for i in 0..gallery.len() {
        let style: fn(&iced::Theme, button::Status) -> button::Style = if i == current {
            styles::thumb_selected
        } else {
            styles::thumb_unselected
        };
        strip = strip.push(
            button(
                Text::new((i + 1).to_string())
                    .size(typography::CAPTION)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fixed(sizing::THUMB_SIZE))
            .style(style)
            .on_press(Message::Select(i)),
        );
    }

    Container::new(
        scrollable(strip).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        )),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::THUMB_STRIP_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .into()
}
