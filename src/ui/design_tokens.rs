// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, and shadows shared
//! by every view.

use iced::{Color, Shadow, Vector};

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_WEAK: f32 = 0.35;
    pub const OVERLAY_MEDIUM: f32 = 0.55;
    pub const OVERLAY_STRONG: f32 = 0.8;
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Font size scale.
pub mod typography {
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 14.0;
    pub const HEADING: f32 = 24.0;
    pub const TITLE: f32 = 20.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod sizing {
    /// Square side of a numbered thumbnail button.
    pub const THUMB_SIZE: f32 = 40.0;
    /// Height reserved for the thumbnail strip.
    pub const THUMB_STRIP_HEIGHT: f32 = 56.0;
    /// Width of the prev/next overlay buttons.
    pub const NAV_BUTTON_WIDTH: f32 = 48.0;
    /// Width of a toast notification.
    pub const TOAST_WIDTH: f32 = 360.0;
}

pub mod shadow {
    use super::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 6.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::INFO_500);
        assert_ne!(palette::WARNING_500, palette::ERROR_500);
    }
}
