#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use strata_tokens::{IconLibrary, Mode, ThemeConfig};

/// Startup theme, set from the config file and command line
static STARTUP_THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Theme the gallery opens with (config file merged with flags)
pub fn startup_theme() -> ThemeConfig {
    STARTUP_THEME.get().copied().unwrap_or_default()
}

/// Strata Gallery - component showcase
#[derive(Parser, Debug)]
#[command(name = "strata-gallery")]
#[command(about = "Strata Gallery - every widget family rendered from live tokens")]
struct Args {
    /// Initial mode: light, dark or high-contrast
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Icon library: outlined or filled
    #[arg(short, long)]
    icons: Option<IconLibrary>,

    /// Theme config file (default: <config_dir>/strata/theme.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut theme = ThemeConfig::load_or_default(args.config.as_deref())?;
    if let Some(mode) = args.mode {
        theme.mode = mode;
    }
    if let Some(icons) = args.icons {
        theme.icon_library = icons;
    }
    let _ = STARTUP_THEME.set(theme);

    tracing::info!(
        mode = %theme.mode,
        icons = %theme.icon_library,
        density = %theme.density,
        reduced_motion = theme.reduced_motion,
        "starting gallery"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Strata Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
