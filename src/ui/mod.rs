//! User interface built with egui
//!
//! `app` wires the eframe shell, `state` holds display state, `components`
//! are the individual views, and `theme` the palette.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;

pub use app::DeckApp;
pub use state::{AppState, ConnectionState, Screen};
pub use theme::Theme;

use crate::config::{AppConfig, DemoVariant};
use crate::session::{ControllerConfig, SessionController};

/// Launch the desktop application
pub fn run(config: AppConfig, variant: DemoVariant, light: bool) -> anyhow::Result<()> {
    let controller = SessionController::spawn(ControllerConfig::default())?;

    let mut theme = if light { Theme::light() } else { Theme::dark() };
    let accent = if light {
        config.accent_color()
    } else {
        config.accent_color_dark().or_else(|| config.accent_color())
    };
    if let Some(accent) = accent {
        theme = theme.with_accent(accent);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.page_title.clone())
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };

    let app_name = config.page_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(DeckApp::new(cc, config, variant, theme, controller)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run UI: {err}"))
}
