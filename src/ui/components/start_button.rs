//! Start call button
//!
//! The one control through which the welcome views act on their
//! environment: a large call-to-action that reports a click so the caller
//! can fire its start callback.

use crate::ui::theme::Theme;
use egui::{Color32, RichText, Vec2};

/// Primary call-to-action button
pub struct StartButton<'a> {
    label: &'a str,
    theme: &'a Theme,
    width: f32,
}

impl<'a> StartButton<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            theme,
            width: 280.0,
        }
    }

    /// Set a custom button width
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the button; returns whether it was clicked this frame
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let button = egui::Button::new(
            RichText::new(self.label)
                .size(16.0)
                .strong()
                .color(Color32::WHITE),
        )
        .min_size(Vec2::new(self.width, 48.0))
        .fill(self.theme.primary)
        .rounding(self.theme.button_rounding);

        ui.add(button).clicked()
    }
}
