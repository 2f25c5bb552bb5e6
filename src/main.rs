use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutordeck::config::{AppConfig, DemoVariant};

/// Desktop demo frontend for a real-time voice-agent platform
#[derive(Debug, Parser)]
#[command(name = "tutordeck", version, about)]
struct Args {
    /// Demo variant to launch
    #[arg(long, value_enum, default_value_t = DemoVariant::Tutor)]
    variant: DemoVariant,

    /// JSON config file overriding the variant preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the light theme
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutordeck=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let preset = AppConfig::for_variant(args.variant);
    let config = match &args.config {
        Some(path) => AppConfig::load(path, preset)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => preset,
    };

    info!(
        variant = args.variant.label(),
        title = %config.page_title,
        "starting tutordeck"
    );

    tutordeck::ui::run(config, args.variant, args.light)
}
