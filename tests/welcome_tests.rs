//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests drive the welcome views by simulating user interactions
//! and checking the accessibility tree for expected elements.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use tutordeck::config::AppConfig;
use tutordeck::ui::components::{SalesWelcomeView, ShoppingWelcomeView, WelcomeView};
use tutordeck::ui::Theme;

/// Application state wrapper for testing
struct TestApp {
    config: AppConfig,
    theme: Theme,
    start_count: usize,
    selected_use_case: Option<&'static str>,
    selected_category: Option<&'static str>,
}

impl TestApp {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            theme: Theme::dark(),
            start_count: 0,
            selected_use_case: None,
            selected_category: None,
        }
    }
}

fn render_tutor(app: &mut TestApp, ui: &mut egui::Ui) {
    let TestApp {
        config,
        theme,
        start_count,
        ..
    } = app;
    WelcomeView::new(config, theme).show(ui, || *start_count += 1);
}

fn render_sales(app: &mut TestApp, ui: &mut egui::Ui) {
    let TestApp {
        config,
        theme,
        start_count,
        selected_use_case,
        ..
    } = app;
    SalesWelcomeView::new(config, theme, selected_use_case).show(ui, || *start_count += 1);
}

fn render_shopping(app: &mut TestApp, ui: &mut egui::Ui) {
    let TestApp {
        config,
        theme,
        start_count,
        selected_category,
        ..
    } = app;
    ShoppingWelcomeView::new(config, theme, selected_category).show(ui, || *start_count += 1);
}

fn tutor_harness() -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 1100.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_tutor(app, ui);
                });
            },
            TestApp::new(AppConfig::tutor()),
        )
}

fn sales_harness() -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 1300.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_sales(app, ui);
                });
            },
            TestApp::new(AppConfig::sales()),
        )
}

fn shopping_harness() -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 1100.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_shopping(app, ui);
                });
            },
            TestApp::new(AppConfig::shopping()),
        )
}

/// Clicking the start control invokes the callback exactly once per click
#[test]
fn test_start_click_invokes_callback_once() {
    let mut harness = tutor_harness();
    harness.run();

    harness.get_by_label("Start Learning").click();
    harness.run();
    assert_eq!(harness.state().start_count, 1);

    // Further frames without clicks must not re-fire the callback
    harness.run();
    harness.run();
    assert_eq!(harness.state().start_count, 1);

    harness.get_by_label("Start Learning").click();
    harness.run();
    assert_eq!(harness.state().start_count, 2);
}

/// The tutor landing screen advertises the concept chips
#[test]
fn test_tutor_welcome_lists_concepts() {
    let mut harness = tutor_harness();
    harness.run();

    for concept in ["Variables", "Loops", "Functions", "Arrays", "Conditionals"] {
        let _ = harness.get_by_label(&format!("📚 {concept}"));
    }
}

/// The sales start control carries the configured label and fires once
#[test]
fn test_sales_start_uses_configured_label() {
    let mut harness = sales_harness();
    harness.run();

    harness.get_by_label("Start Sales Call 🚀").click();
    harness.run();
    assert_eq!(harness.state().start_count, 1);
}

/// Selecting a use case is local state only; it never starts a session
#[test]
fn test_sales_use_case_selection_is_local() {
    let mut harness = sales_harness();
    harness.run();

    harness.get_by_label("SaaS Platform").click();
    harness.run();

    assert_eq!(harness.state().selected_use_case, Some("saas"));
    assert_eq!(harness.state().start_count, 0);

    // Picking another use case replaces the selection
    harness.get_by_label("Marketplace").click();
    harness.run();
    assert_eq!(harness.state().selected_use_case, Some("marketplace"));
    assert_eq!(harness.state().start_count, 0);
}

/// The shopping variant exposes its category picker and start control
#[test]
fn test_shopping_category_selection_and_start() {
    let mut harness = shopping_harness();
    harness.run();

    harness.get_by_label("Electronics").click();
    harness.run();
    assert_eq!(harness.state().selected_category, Some("Electronics"));
    assert_eq!(harness.state().start_count, 0);

    harness.get_by_label("Start Shopping").click();
    harness.run();
    assert_eq!(harness.state().start_count, 1);
}
