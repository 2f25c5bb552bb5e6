//! Sales welcome view
//!
//! Landing screen for the sales demo: company pitch, a use-case picker,
//! and the start control. The use-case selection is purely local; it is
//! not forwarded anywhere.

use crate::config::AppConfig;
use crate::ui::components::StartButton;
use crate::ui::theme::Theme;
use egui::{self, RichText, ScrollArea, Stroke, Vec2};

/// Business types offered on the landing screen: (id, label, icon)
const USE_CASES: [(&str, &str, &str); 5] = [
    ("ecommerce", "E-Commerce Store", "🛍"),
    ("saas", "SaaS Platform", "💻"),
    ("subscription", "Subscription Business", "🔄"),
    ("marketplace", "Marketplace", "🏪"),
    ("other", "Other", "❓"),
];

/// Feature highlights under the use-case picker: (icon, title, copy)
const FEATURES: [(&str, &str, &str); 3] = [
    ("🎯", "Expert Advice", "Personalized guidance"),
    ("⚡", "Quick Setup", "Start in minutes"),
    ("🔒", "Secure", "PCI DSS Level 1"),
];

/// Sales landing view
pub struct SalesWelcomeView<'a> {
    config: &'a AppConfig,
    theme: &'a Theme,
    selected_use_case: &'a mut Option<&'static str>,
}

impl<'a> SalesWelcomeView<'a> {
    pub fn new(
        config: &'a AppConfig,
        theme: &'a Theme,
        selected_use_case: &'a mut Option<&'static str>,
    ) -> Self {
        Self {
            config,
            theme,
            selected_use_case,
        }
    }

    /// Show the view; `on_start` fires once per click of the start control
    pub fn show(mut self, ui: &mut egui::Ui, on_start: impl FnOnce()) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(640.0);
                    ui.add_space(self.theme.spacing_lg);

                    ui.label(RichText::new("💳").size(52.0));
                    ui.label(
                        RichText::new(&self.config.company_name)
                            .size(32.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(&self.config.page_title)
                            .size(18.0)
                            .color(self.theme.text_secondary),
                    );
                    ui.label(
                        RichText::new(&self.config.page_description)
                            .size(13.0)
                            .color(self.theme.text_muted),
                    );

                    ui.add_space(self.theme.spacing_lg);
                    self.company_card(ui);

                    ui.add_space(self.theme.spacing_lg);
                    ui.label(
                        RichText::new("What's your business type?")
                            .strong()
                            .color(self.theme.text_secondary),
                    );
                    ui.add_space(self.theme.spacing_sm);
                    self.use_case_grid(ui);

                    ui.add_space(self.theme.spacing_lg);
                    ui.columns(FEATURES.len(), |columns| {
                        for (i, (icon, title, copy)) in FEATURES.iter().enumerate() {
                            Self::feature_cell(&mut columns[i], self.theme, icon, title, copy);
                        }
                    });

                    ui.add_space(self.theme.spacing_lg);
                    if StartButton::new(&self.config.start_button_text, self.theme)
                        .with_width(360.0)
                        .show(ui)
                    {
                        on_start();
                    }

                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new("Questions? Our team is here to help. Let's connect!")
                            .size(12.0)
                            .color(self.theme.text_muted),
                    );
                    ui.add_space(self.theme.spacing);
                });
            });
    }

    fn company_card(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .stroke(Stroke::new(1.0, self.theme.bg_tertiary))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("About {}", self.config.company_name))
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.label(
                    RichText::new(
                        "A payments platform helping businesses accept online payments: \
                         credit and debit cards, bank transfers, and digital wallets.",
                    )
                    .size(13.0)
                    .color(self.theme.text_secondary),
                );
                ui.add_space(self.theme.spacing_sm);

                ui.columns(2, |columns| {
                    Self::stat_tile(&mut columns[0], self.theme, "Setup Fee", "FREE");
                    Self::stat_tile(
                        &mut columns[1],
                        self.theme,
                        "Commission",
                        "1-2% per transaction",
                    );
                });
            });
    }

    fn stat_tile(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &str) {
        egui::Frame::none()
            .fill(theme.bg_tertiary)
            .rounding(theme.button_rounding)
            .inner_margin(theme.spacing_sm)
            .show(ui, |ui| {
                ui.label(RichText::new(label).size(11.0).color(theme.text_muted));
                ui.label(
                    RichText::new(value)
                        .size(16.0)
                        .strong()
                        .color(theme.text_primary),
                );
            });
    }

    fn use_case_grid(&mut self, ui: &mut egui::Ui) {
        for pair in USE_CASES.chunks(2) {
            ui.columns(2, |columns| {
                for (i, (id, label, icon)) in pair.iter().copied().enumerate() {
                    Self::use_case_button(
                        &mut columns[i],
                        self.theme,
                        self.selected_use_case,
                        id,
                        label,
                        icon,
                    );
                }
            });
        }
    }

    fn use_case_button(
        ui: &mut egui::Ui,
        theme: &Theme,
        selected: &mut Option<&'static str>,
        id: &'static str,
        label: &'static str,
        icon: &str,
    ) {
        let is_selected = *selected == Some(id);
        let fill = if is_selected {
            theme.primary.gamma_multiply(0.35)
        } else {
            theme.bg_secondary
        };
        let stroke = if is_selected {
            Stroke::new(1.0, theme.primary)
        } else {
            Stroke::new(1.0, theme.bg_tertiary)
        };

        let button = egui::Button::new(
            RichText::new(format!("{icon}  {label}"))
                .size(13.0)
                .color(theme.text_primary),
        )
        .min_size(Vec2::new(ui.available_width(), 48.0))
        .fill(fill)
        .stroke(stroke)
        .rounding(theme.button_rounding);

        let response = ui.add(button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label)
        });

        if response.clicked() {
            *selected = Some(id);
        }
    }

    fn feature_cell(ui: &mut egui::Ui, theme: &Theme, icon: &str, title: &str, copy: &str) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(icon).size(24.0));
            ui.label(RichText::new(title).strong().color(theme.text_primary));
            ui.label(RichText::new(copy).size(11.0).color(theme.text_muted));
        });
    }
}
