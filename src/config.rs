//! Application configuration
//!
//! Static branding and capability settings for the demo variants, loaded
//! once at startup and immutable afterwards. A JSON file can override any
//! subset of the variant preset's fields.

use clap::ValueEnum;
use egui::Color32;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::{DeckError, Result};

/// Demo variant selectable at launch
///
/// The variants are alternate landing experiences over the same session
/// machinery; exactly one is live per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DemoVariant {
    /// Active-recall learning coach
    #[default]
    Tutor,
    /// Sales development representative
    Sales,
    /// Voice shopping assistant
    Shopping,
}

impl DemoVariant {
    pub fn label(self) -> &'static str {
        match self {
            DemoVariant::Tutor => "Tutor",
            DemoVariant::Sales => "Sales",
            DemoVariant::Shopping => "Shopping",
        }
    }
}

/// Static application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub company_name: String,
    pub page_title: String,
    pub page_description: String,
    pub start_button_text: String,

    pub supports_chat_input: bool,
    pub supports_video_input: bool,
    pub supports_screen_share: bool,
    pub pre_connect_buffer_enabled: bool,

    /// Logo asset paths (light and dark backgrounds)
    pub logo: String,
    pub logo_dark: Option<String>,
    /// Accent colors as `#rrggbb` hex strings
    pub accent: Option<String>,
    pub accent_dark: Option<String>,

    /// Identifiers for hosted sandbox deployments of the agent backend
    pub sandbox_id: Option<String>,
    pub agent_name: Option<String>,
}

/// Field-level overrides parsed from a JSON config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    company_name: Option<String>,
    page_title: Option<String>,
    page_description: Option<String>,
    start_button_text: Option<String>,
    supports_chat_input: Option<bool>,
    supports_video_input: Option<bool>,
    supports_screen_share: Option<bool>,
    pre_connect_buffer_enabled: Option<bool>,
    logo: Option<String>,
    logo_dark: Option<String>,
    accent: Option<String>,
    accent_dark: Option<String>,
    sandbox_id: Option<String>,
    agent_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::tutor()
    }
}

impl AppConfig {
    /// Preset for the tutoring demo
    pub fn tutor() -> Self {
        Self {
            company_name: "Teach-the-Tutor".to_string(),
            page_title: "Active Recall Learning Coach".to_string(),
            page_description: "Master programming concepts through interactive learning modes"
                .to_string(),
            start_button_text: "Start Learning".to_string(),
            supports_chat_input: true,
            supports_video_input: true,
            supports_screen_share: true,
            pre_connect_buffer_enabled: true,
            logo: "assets/logo.svg".to_string(),
            logo_dark: Some("assets/logo-dark.svg".to_string()),
            accent: Some("#3b82f6".to_string()),
            accent_dark: Some("#60a5fa".to_string()),
            sandbox_id: None,
            agent_name: None,
        }
    }

    /// Preset for the sales demo
    pub fn sales() -> Self {
        Self {
            company_name: "Brightpay".to_string(),
            page_title: "Sales Development Representative".to_string(),
            page_description:
                "Let's discuss how Brightpay can help your business accept payments".to_string(),
            start_button_text: "Start Sales Call 🚀".to_string(),
            supports_chat_input: true,
            supports_video_input: false,
            supports_screen_share: false,
            pre_connect_buffer_enabled: true,
            logo: "assets/logo.svg".to_string(),
            logo_dark: Some("assets/logo-dark.svg".to_string()),
            accent: Some("#2563eb".to_string()),
            accent_dark: Some("#3b82f6".to_string()),
            sandbox_id: None,
            agent_name: Some("sdr".to_string()),
        }
    }

    /// Preset for the shopping demo
    pub fn shopping() -> Self {
        Self {
            company_name: "VoiceCart".to_string(),
            page_title: "Voice Shopping Assistant".to_string(),
            page_description: "Browse products, place orders, and track spending with your voice"
                .to_string(),
            start_button_text: "Start Shopping".to_string(),
            supports_chat_input: true,
            supports_video_input: false,
            supports_screen_share: false,
            pre_connect_buffer_enabled: true,
            logo: "assets/logo.svg".to_string(),
            logo_dark: Some("assets/logo-dark.svg".to_string()),
            accent: Some("#16a34a".to_string()),
            accent_dark: Some("#22c55e".to_string()),
            sandbox_id: None,
            agent_name: Some("shopper".to_string()),
        }
    }

    pub fn for_variant(variant: DemoVariant) -> Self {
        match variant {
            DemoVariant::Tutor => Self::tutor(),
            DemoVariant::Sales => Self::sales(),
            DemoVariant::Shopping => Self::shopping(),
        }
    }

    /// Load a JSON config file, merging its fields over `base`
    pub fn load(path: &Path, base: Self) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let overrides: ConfigOverrides = serde_json::from_str(&raw)
            .map_err(|e| DeckError::ConfigError(format!("invalid config JSON: {e}")))?;
        Ok(base.merged(overrides))
    }

    fn merged(mut self, o: ConfigOverrides) -> Self {
        if let Some(v) = o.company_name {
            self.company_name = v;
        }
        if let Some(v) = o.page_title {
            self.page_title = v;
        }
        if let Some(v) = o.page_description {
            self.page_description = v;
        }
        if let Some(v) = o.start_button_text {
            self.start_button_text = v;
        }
        if let Some(v) = o.supports_chat_input {
            self.supports_chat_input = v;
        }
        if let Some(v) = o.supports_video_input {
            self.supports_video_input = v;
        }
        if let Some(v) = o.supports_screen_share {
            self.supports_screen_share = v;
        }
        if let Some(v) = o.pre_connect_buffer_enabled {
            self.pre_connect_buffer_enabled = v;
        }
        if let Some(v) = o.logo {
            self.logo = v;
        }
        if let Some(v) = o.logo_dark {
            self.logo_dark = Some(v);
        }
        if let Some(v) = o.accent {
            self.accent = Some(v);
        }
        if let Some(v) = o.accent_dark {
            self.accent_dark = Some(v);
        }
        if let Some(v) = o.sandbox_id {
            self.sandbox_id = Some(v);
        }
        if let Some(v) = o.agent_name {
            self.agent_name = Some(v);
        }
        self
    }

    /// Accent color parsed from the hex string, if present and valid
    pub fn accent_color(&self) -> Option<Color32> {
        self.accent.as_deref().and_then(parse_hex_color)
    }

    /// Dark-background accent color, if present and valid
    pub fn accent_color_dark(&self) -> Option<Color32> {
        self.accent_dark.as_deref().and_then(parse_hex_color)
    }
}

/// Parse a `#rrggbb` hex string into a color
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Color32::from_rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}
