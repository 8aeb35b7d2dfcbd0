// SPDX-License-Identifier: MPL-2.0
//! Display state of the gallery viewer.

use crate::media::ImageData;

/// What the image pane is currently showing.
#[derive(Debug, Clone, Default)]
pub enum Display {
    /// A resolve or download is in flight.
    #[default]
    Loading,
    /// A decoded image.
    Image(ImageData),
    /// Every candidate failed to resolve and to load.
    Missing,
}

/// Per-open viewer state. Navigation itself lives in the gallery session;
/// this only tracks what is on screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub display: Display,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to the loading state, e.g. when a new show request starts.
    pub fn reset(&mut self) {
        self.display = Display::Loading;
    }

    pub fn show_image(&mut self, image: ImageData) {
        self.display = Display::Image(image);
    }

    pub fn show_missing(&mut self) {
        self.display = Display::Missing;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.display, Display::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    #[test]
    fn new_state_is_loading() {
        assert!(State::new().is_loading());
    }

    #[test]
    fn reset_returns_to_loading() {
        let mut state = State::new();
        state.show_missing();
        state.reset();
        assert!(state.is_loading());
    }

    #[test]
    fn show_image_replaces_display() {
        let mut state = State::new();
        state.show_image(ImageData {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        });
        assert!(matches!(state.display, Display::Image(_)));
    }
}
