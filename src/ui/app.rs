//! Main application struct and eframe integration
//!
//! This module contains the main DeckApp that implements eframe::App.

use crate::config::{AppConfig, DemoVariant};
use crate::session::SessionController;
use crate::ui::components::{
    DebugPanel, SalesWelcomeView, SessionStatusView, ShoppingWelcomeView, WelcomeView,
};
use crate::ui::state::{AppState, ConnectionState, Screen};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};
use std::time::{Duration, Instant};

/// Main Tutordeck application
pub struct DeckApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Static configuration for the active variant
    config: AppConfig,
    /// Which demo variant is live
    variant: DemoVariant,
    /// Boundary to the external session backend
    controller: SessionController,
    /// Last frame time for FPS calculation
    last_frame_time: Instant,
}

impl DeckApp {
    /// Create a new Tutordeck application
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        variant: DemoVariant,
        theme: Theme,
        controller: SessionController,
    ) -> Self {
        theme.apply(&cc.egui_ctx);

        let mut state = AppState::new();
        state
            .debug_info
            .add_log(format!("Tutordeck UI initialized ({} variant)", variant.label()));

        Self {
            state,
            theme,
            config,
            variant,
            controller,
            last_frame_time: Instant::now(),
        }
    }

    /// Show the top header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&self.config.company_name)
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.label(
                        RichText::new(format!("{} Demo", self.variant.label()))
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Debug toggle
                        if ui.button("🔍").on_hover_text("Toggle Debug Panel").clicked() {
                            self.state.show_debug_panel = !self.state.show_debug_panel;
                        }

                        // End control, only while a session screen is up
                        if self.state.screen == Screen::Session
                            && ui.button("End Session").clicked()
                        {
                            self.controller.end();
                            self.state
                                .debug_info
                                .add_log("Session end requested".to_string());
                        }

                        // FPS indicator
                        ui.label(
                            RichText::new(format!("{:.0} FPS", self.state.debug_info.fps))
                                .size(11.0)
                                .family(egui::FontFamily::Monospace)
                                .color(self.theme.text_muted),
                        );
                    });
                });
            });
    }

    /// Show the debug panel on the side
    fn show_debug_panel(&mut self, ctx: &egui::Context) {
        if !self.state.show_debug_panel {
            return;
        }

        SidePanel::right("debug_panel")
            .resizable(true)
            .default_width(300.0)
            .min_width(250.0)
            .max_width(500.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                DebugPanel::new(&self.state, &self.config, &self.theme).show(ui);
            });
    }

    /// Show the main content area
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                self.show_error_notice(ui);

                match self.state.screen {
                    Screen::Welcome => self.show_welcome(ui),
                    Screen::Session => {
                        SessionStatusView::new(
                            &self.state.snapshot,
                            self.state.connection,
                            &self.theme,
                        )
                        .show(ui);
                    }
                }
            });
    }

    /// Dismissible notice for controller-side failures
    fn show_error_notice(&mut self, ui: &mut egui::Ui) {
        let Some(error) = self.state.last_error.clone() else {
            return;
        };

        egui::Frame::none()
            .fill(self.theme.error.gamma_multiply(0.15))
            .rounding(self.theme.button_rounding)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").color(self.theme.error));
                    ui.label(RichText::new(&error).size(13.0).color(self.theme.error));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.state.last_error = None;
                        }
                    });
                });
            });
    }

    /// Show the landing screen for the active variant
    fn show_welcome(&mut self, ui: &mut egui::Ui) {
        let mut start_requested = false;

        match self.variant {
            DemoVariant::Tutor => {
                WelcomeView::new(&self.config, &self.theme).show(ui, || start_requested = true);
            }
            DemoVariant::Sales => {
                SalesWelcomeView::new(
                    &self.config,
                    &self.theme,
                    &mut self.state.selected_use_case,
                )
                .show(ui, || start_requested = true);
            }
            DemoVariant::Shopping => {
                ShoppingWelcomeView::new(
                    &self.config,
                    &self.theme,
                    &mut self.state.selected_category,
                )
                .show(ui, || start_requested = true);
            }
        }

        if start_requested {
            // Fire-and-forget toward the backend; the controller reports
            // progress through events
            self.controller.start();
            self.state.begin_connecting();
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Calculate delta time for FPS
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f64();
        self.last_frame_time = now;
        self.state.update_fps(delta);

        // Drain controller events
        for event in self.controller.poll() {
            self.state.apply_event(event);
        }

        // Render UI
        self.show_header(ctx);
        self.show_debug_panel(ctx);
        self.show_content(ctx);

        // Keep polling while a session is connecting or live
        if self.state.connection != ConnectionState::Disconnected {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
