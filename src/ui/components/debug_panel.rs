//! Debug panel component
//!
//! Displays internal state information for debugging.

use crate::config::AppConfig;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, ScrollArea};

/// Debug panel component
pub struct DebugPanel<'a> {
    state: &'a AppState,
    config: &'a AppConfig,
    theme: &'a Theme,
}

impl<'a> DebugPanel<'a> {
    pub fn new(state: &'a AppState, config: &'a AppConfig, theme: &'a Theme) -> Self {
        Self {
            state,
            config,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    // Header
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("Debug Panel")
                                .strong()
                                .color(self.theme.text_primary),
                        );

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{:.1} FPS", self.state.debug_info.fps))
                                    .size(12.0)
                                    .family(egui::FontFamily::Monospace)
                                    .color(self.fps_color()),
                            );
                        });
                    });

                    ui.separator();

                    // Stats grid
                    egui::Grid::new("debug_stats")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            self.stat_row(ui, "Screen", &format!("{:?}", self.state.screen));
                            self.stat_row(ui, "Connection", self.state.connection.label());
                            self.stat_row(ui, "Session", &self.session_status());
                            self.stat_row(ui, "Started", &self.started_status());
                            self.stat_row(
                                ui,
                                "Mode",
                                self.state.snapshot.current_mode().display_name(),
                            );
                            self.stat_row(ui, "Voice", self.state.snapshot.current_voice().name());
                            self.stat_row(
                                ui,
                                "Concept",
                                self.state.snapshot.current_concept().unwrap_or_default(),
                            );
                            self.stat_row(
                                ui,
                                "Agent",
                                self.config.agent_name.as_deref().unwrap_or_default(),
                            );
                            self.stat_row(
                                ui,
                                "Sandbox",
                                self.config.sandbox_id.as_deref().unwrap_or_default(),
                            );
                            self.stat_row(
                                ui,
                                "Accent",
                                self.config.accent.as_deref().unwrap_or_default(),
                            );
                        });

                    // Error display
                    if let Some(error) = &self.state.last_error {
                        ui.add_space(self.theme.spacing_sm);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("⚠").color(self.theme.error));
                            ui.label(RichText::new(error).size(12.0).color(self.theme.error));
                        });
                    }

                    ui.add_space(self.theme.spacing_sm);
                    ui.separator();

                    // Log messages
                    ui.label(
                        RichText::new("Recent Logs")
                            .size(12.0)
                            .strong()
                            .color(self.theme.text_secondary),
                    );

                    let log_height = 140.0;
                    ScrollArea::vertical()
                        .max_height(log_height)
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                for msg in &self.state.debug_info.log_messages {
                                    ui.label(
                                        RichText::new(msg)
                                            .size(11.0)
                                            .family(egui::FontFamily::Monospace)
                                            .color(self.theme.text_muted),
                                    );
                                }

                                if self.state.debug_info.log_messages.is_empty() {
                                    ui.label(
                                        RichText::new("No log messages")
                                            .size(11.0)
                                            .color(self.theme.text_muted)
                                            .italics(),
                                    );
                                }
                            });
                        });
                });
            });
    }

    fn stat_row(&self, ui: &mut egui::Ui, label: &str, value: &str) {
        ui.label(
            RichText::new(label)
                .size(12.0)
                .color(self.theme.text_muted),
        );

        let display_value = if value.is_empty() { "—" } else { value };

        ui.label(
            RichText::new(display_value)
                .size(12.0)
                .family(egui::FontFamily::Monospace)
                .color(self.theme.text_primary),
        );

        ui.end_row();
    }

    fn session_status(&self) -> String {
        match &self.state.session_id {
            Some(id) => id.to_string().chars().take(8).collect(),
            None => String::new(),
        }
    }

    fn started_status(&self) -> String {
        match &self.state.session_started_at {
            Some(at) => at.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }

    fn fps_color(&self) -> egui::Color32 {
        let fps = self.state.debug_info.fps;
        if fps >= 55.0 {
            self.theme.success
        } else if fps >= 30.0 {
            self.theme.warning
        } else {
            self.theme.error
        }
    }
}
