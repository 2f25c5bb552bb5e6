//! Shopping welcome view
//!
//! Landing screen for the voice shopping demo: what the assistant can do,
//! a category picker, and the start control. The category selection is
//! purely local; it is not forwarded anywhere.

use crate::config::AppConfig;
use crate::ui::components::StartButton;
use crate::ui::theme::Theme;
use egui::{self, RichText, ScrollArea, Stroke, Vec2};

/// Product categories offered on the landing screen: (label, icon)
const CATEGORIES: [(&str, &str); 4] = [
    ("Shoes", "👟"),
    ("Apparel", "👕"),
    ("Electronics", "🎧"),
    ("Accessories", "⌚"),
];

/// What the assistant can do, mirroring its tool surface: (icon, copy)
const ABILITIES: [(&str, &str); 4] = [
    ("🛍", "Browse the catalog by category, color, or price"),
    ("📦", "Place orders and pick sizes by voice"),
    ("↩", "Cancel an order or a single item, stock restored"),
    ("💰", "Ask for spending totals, today or all-time"),
];

/// Shopping landing view
pub struct ShoppingWelcomeView<'a> {
    config: &'a AppConfig,
    theme: &'a Theme,
    selected_category: &'a mut Option<&'static str>,
}

impl<'a> ShoppingWelcomeView<'a> {
    pub fn new(
        config: &'a AppConfig,
        theme: &'a Theme,
        selected_category: &'a mut Option<&'static str>,
    ) -> Self {
        Self {
            config,
            theme,
            selected_category,
        }
    }

    /// Show the view; `on_start` fires once per click of the start control
    pub fn show(mut self, ui: &mut egui::Ui, on_start: impl FnOnce()) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(600.0);
                    ui.add_space(self.theme.spacing_lg);

                    ui.label(RichText::new("🛒").size(52.0));
                    ui.label(
                        RichText::new(&self.config.company_name)
                            .size(32.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(&self.config.page_description)
                            .size(15.0)
                            .color(self.theme.text_secondary),
                    );

                    ui.add_space(self.theme.spacing_lg);
                    self.abilities_card(ui);

                    ui.add_space(self.theme.spacing_lg);
                    ui.label(
                        RichText::new("What are you shopping for today?")
                            .strong()
                            .color(self.theme.text_secondary),
                    );
                    ui.add_space(self.theme.spacing_sm);
                    self.category_row(ui);

                    ui.add_space(self.theme.spacing_lg);
                    if StartButton::new(&self.config.start_button_text, self.theme).show(ui) {
                        on_start();
                    }

                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new("Everything runs by voice; just say what you need.")
                            .size(12.0)
                            .color(self.theme.text_muted),
                    );
                    ui.add_space(self.theme.spacing);
                });
            });
    }

    fn abilities_card(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .stroke(Stroke::new(1.0, self.theme.bg_tertiary))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                for (icon, copy) in ABILITIES {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(icon).size(16.0));
                        ui.label(
                            RichText::new(copy)
                                .size(13.0)
                                .color(self.theme.text_secondary),
                        );
                    });
                }
            });
    }

    fn category_row(&mut self, ui: &mut egui::Ui) {
        ui.columns(CATEGORIES.len(), |columns| {
            for (i, (label, icon)) in CATEGORIES.iter().copied().enumerate() {
                Self::category_button(
                    &mut columns[i],
                    self.theme,
                    self.selected_category,
                    label,
                    icon,
                );
            }
        });
    }

    fn category_button(
        ui: &mut egui::Ui,
        theme: &Theme,
        selected: &mut Option<&'static str>,
        label: &'static str,
        icon: &str,
    ) {
        let is_selected = *selected == Some(label);
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
            RichText::new(format!("{icon} {label}"))
                .size(13.0)
                .color(theme.text_primary),
        )
        .min_size(Vec2::new(ui.available_width(), 44.0))
        .fill(fill)
        .stroke(stroke)
        .rounding(theme.button_rounding);

        let response = ui.add(button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label)
        });

        if response.clicked() {
            *selected = Some(label);
        }
    }
}
