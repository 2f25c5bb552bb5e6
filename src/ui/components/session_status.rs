//! Session status view
//!
//! Read-only reflection of the agent-driven session: mode banner, status
//! card, guidance copy, mode indicators, and the listening animation. The
//! view renders straight from the latest snapshot each frame and keeps no
//! copy of its inputs.

use crate::session::{Mode, SessionSnapshot, Voice};
use crate::ui::state::ConnectionState;
use crate::ui::theme::Theme;
use egui::{self, Rect, RichText, ScrollArea, Sense, Stroke, Vec2};

/// Live session display
pub struct SessionStatusView<'a> {
    snapshot: &'a SessionSnapshot,
    connection: ConnectionState,
    theme: &'a Theme,
}

impl<'a> SessionStatusView<'a> {
    pub fn new(
        snapshot: &'a SessionSnapshot,
        connection: ConnectionState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            snapshot,
            connection,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let mode = self.snapshot.current_mode();
        let voice = self.snapshot.current_voice();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(600.0);
                    ui.add_space(self.theme.spacing_lg);

                    // Mode banner
                    ui.label(RichText::new(mode.icon()).size(48.0));
                    ui.label(
                        RichText::new(mode.label())
                            .size(30.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(mode.blurb())
                            .size(15.0)
                            .color(self.theme.text_secondary),
                    );
                    ui.add_space(self.theme.spacing);

                    if self.connection == ConnectionState::Connecting {
                        self.connecting_notice(ui);
                        return;
                    }

                    self.status_card(ui, mode, voice);
                    ui.add_space(self.theme.spacing);
                    self.mode_indicators(ui, mode);
                    ui.add_space(self.theme.spacing);
                    self.listening_indicator(ui);
                    ui.add_space(self.theme.spacing);
                });
            });
    }

    /// Shown in place of the status card until the backend reports in
    fn connecting_notice(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(
                        RichText::new("Connecting to the agent...")
                            .size(14.0)
                            .color(self.theme.text_secondary),
                    );
                });
            });
    }

    fn status_card(&self, ui: &mut egui::Ui, mode: Mode, voice: Voice) {
        let accent = mode.accent();

        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .stroke(Stroke::new(2.0, accent.gamma_multiply(0.6)))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing_lg)
            .show(ui, |ui| {
                // Concept block, omitted entirely while the agent has not
                // set one
                if let Some(concept) = self.snapshot.current_concept() {
                    ui.label(
                        RichText::new("📚 CURRENT CONCEPT")
                            .size(11.0)
                            .color(self.theme.text_muted),
                    );
                    let response = ui.label(
                        RichText::new(concept)
                            .size(22.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Label,
                            true,
                            format!("Current concept: {concept}"),
                        )
                    });
                    ui.add_space(self.theme.spacing_sm);
                }

                ui.columns(2, |columns| {
                    Self::status_cell(
                        &mut columns[0],
                        self.theme,
                        "🎯 LEARNING MODE",
                        mode.display_name(),
                        accent,
                        format!("Learning mode: {}", mode.display_name()),
                    );
                    Self::status_cell(
                        &mut columns[1],
                        self.theme,
                        "🎙 VOICE",
                        &format!("{} {}", voice.emoji(), voice.name()),
                        voice.accent(),
                        format!("Voice: {}", voice.name()),
                    );
                });

                ui.add_space(self.theme.spacing_sm);

                // Guidance box
                egui::Frame::none()
                    .fill(self.theme.bg_tertiary)
                    .rounding(self.theme.button_rounding)
                    .inner_margin(self.theme.spacing)
                    .show(ui, |ui| {
                        let response = ui.label(
                            RichText::new(mode.guidance())
                                .size(13.0)
                                .color(self.theme.text_secondary),
                        );
                        response.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Label,
                                true,
                                format!("Guidance: {}", mode.guidance()),
                            )
                        });
                    });
            });
    }

    fn status_cell(
        ui: &mut egui::Ui,
        theme: &Theme,
        heading: &str,
        value: &str,
        accent: egui::Color32,
        accessibility_label: String,
    ) {
        egui::Frame::none()
            .fill(theme.bg_tertiary)
            .rounding(theme.button_rounding)
            .inner_margin(theme.spacing_sm)
            .show(ui, |ui| {
                ui.label(RichText::new(heading).size(11.0).color(theme.text_muted));
                let response =
                    ui.label(RichText::new(value).size(18.0).strong().color(accent));
                response.widget_info(move || {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        accessibility_label.clone(),
                    )
                });
            });
    }

    fn mode_indicators(&self, ui: &mut egui::Ui, current: Mode) {
        ui.horizontal(|ui| {
            for mode in Mode::SELECTABLE {
                let active = mode == current;
                let (fill, text_color) = if active {
                    (self.theme.text_primary, self.theme.primary)
                } else {
                    (self.theme.bg_tertiary, self.theme.text_secondary)
                };

                egui::Frame::none()
                    .fill(fill)
                    .rounding(egui::Rounding::same(14.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                    .show(ui, |ui| {
                        let response = ui.label(
                            RichText::new(mode.display_name())
                                .size(13.0)
                                .strong()
                                .color(text_color),
                        );
                        let label = format!(
                            "Mode indicator {}{}",
                            mode.display_name(),
                            if active { " (active)" } else { "" }
                        );
                        response.widget_info(move || {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Label,
                                true,
                                label.clone(),
                            )
                        });
                    });
            }
        });
    }

    /// Three pulsing bars plus a caption
    fn listening_indicator(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let time = ui.ctx().input(|i| i.time);
            for i in 0..3 {
                let phase = ((time * 3.0 + i as f64 * 0.7).sin() * 0.5 + 0.5) as f32;
                let height = 10.0 + phase * 14.0;

                let (rect, _response) =
                    ui.allocate_exact_size(Vec2::new(5.0, 24.0), Sense::hover());
                let bar = Rect::from_center_size(rect.center(), Vec2::new(4.0, height));
                ui.painter().rect_filled(bar, 2.0, self.theme.listening);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new("Listening...")
                    .size(13.0)
                    .color(self.theme.text_secondary),
            );
        });

        ui.ctx().request_repaint();
    }
}
