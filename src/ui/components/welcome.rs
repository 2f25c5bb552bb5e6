//! Tutor welcome view
//!
//! Landing screen for the tutoring demo: marketing copy, the mode cards,
//! concept chips, and the start control.

use crate::config::AppConfig;
use crate::session::Mode;
use crate::ui::components::StartButton;
use crate::ui::theme::Theme;
use egui::{self, Margin, RichText, Rounding, ScrollArea, Stroke};

/// Concepts offered on the landing screen
const CONCEPTS: [&str; 5] = ["Variables", "Loops", "Functions", "Arrays", "Conditionals"];

/// Card copy for the three learning modes
const MODE_CARDS: [(Mode, &str); 3] = [
    (Mode::Learn, "Get concept explanations"),
    (Mode::Quiz, "Test your understanding"),
    (Mode::TeachBack, "Explain to the tutor"),
];

/// Tutor landing view
pub struct WelcomeView<'a> {
    config: &'a AppConfig,
    theme: &'a Theme,
}

impl<'a> WelcomeView<'a> {
    pub fn new(config: &'a AppConfig, theme: &'a Theme) -> Self {
        Self { config, theme }
    }

    /// Show the view; `on_start` fires once per click of the start control
    pub fn show(self, ui: &mut egui::Ui, on_start: impl FnOnce()) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(680.0);
                    ui.add_space(self.theme.spacing_lg);

                    ui.label(RichText::new("🎓").size(56.0));
                    ui.label(
                        RichText::new(&self.config.company_name)
                            .size(34.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(&self.config.page_description)
                            .size(16.0)
                            .color(self.theme.text_secondary),
                    );

                    self.capability_row(ui);
                    ui.add_space(self.theme.spacing_lg);

                    // Mode cards
                    ui.columns(MODE_CARDS.len(), |columns| {
                        for (i, (mode, copy)) in MODE_CARDS.iter().enumerate() {
                            Self::mode_card(&mut columns[i], self.theme, *mode, copy);
                        }
                    });

                    ui.add_space(self.theme.spacing_lg);

                    // Concept chips
                    ui.label(
                        RichText::new("Choose from these concepts:")
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.add_space(self.theme.spacing_sm);
                    ui.horizontal_wrapped(|ui| {
                        for concept in CONCEPTS {
                            self.concept_chip(ui, concept);
                        }
                    });

                    ui.add_space(self.theme.spacing_lg);

                    if StartButton::new(&self.config.start_button_text, self.theme).show(ui) {
                        on_start();
                    }

                    ui.add_space(self.theme.spacing_lg);
                    ui.label(
                        RichText::new(
                            "Built for a real-time voice agent • Active Recall Learning • Multi-mode Training",
                        )
                        .size(12.0)
                        .color(self.theme.text_muted),
                    );
                    ui.add_space(self.theme.spacing);
                });
            });
    }

    /// Input capabilities advertised by the configuration
    fn capability_row(&self, ui: &mut egui::Ui) {
        let mut capabilities = vec!["🎙 Voice"];
        if self.config.supports_chat_input {
            capabilities.push("💬 Chat");
        }
        if self.config.supports_video_input {
            capabilities.push("📷 Video");
        }
        if self.config.supports_screen_share {
            capabilities.push("🖥 Screen share");
        }

        ui.add_space(self.theme.spacing_sm);
        ui.label(
            RichText::new(capabilities.join("  •  "))
                .size(12.0)
                .color(self.theme.text_muted),
        );
    }

    fn mode_card(ui: &mut egui::Ui, theme: &Theme, mode: Mode, copy: &str) {
        egui::Frame::none()
            .fill(theme.bg_secondary)
            .stroke(Stroke::new(1.0, mode.accent().gamma_multiply(0.5)))
            .rounding(theme.card_rounding)
            .inner_margin(theme.spacing)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(mode.icon()).size(26.0));
                    ui.label(
                        RichText::new(mode.display_name())
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(copy)
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                });
            });
    }

    fn concept_chip(&self, ui: &mut egui::Ui, concept: &str) {
        egui::Frame::none()
            .fill(self.theme.secondary.gamma_multiply(0.2))
            .stroke(Stroke::new(1.0, self.theme.secondary.gamma_multiply(0.5)))
            .rounding(Rounding::same(12.0))
            .inner_margin(Margin::symmetric(10.0, 4.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("📚 {concept}"))
                        .size(12.0)
                        .color(self.theme.text_secondary),
                );
            });
    }
}
