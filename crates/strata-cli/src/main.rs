//! Strata CLI
//!
//! Thin wrapper around strata-tokens for exporting, auditing and querying
//! the resolved design tokens.
//!
//! ## Usage
//!
//! ```bash
//! # Export the dark theme as CSS custom properties
//! strata --mode dark tokens --format css
//!
//! # Read one token
//! strata get semantic.text.primary
//!
//! # Check that every token traces back to the base tier
//! strata lint
//!
//! # Show the configuration of a status
//! strata status warning
//!
//! # List a chart palette, or pick one cyclic entry
//! strata palette categorical --index 12
//!
//! # Show a data-table density preset
//! strata density compact
//!
//! # Print an icon as SVG
//! strata icon search --library filled
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use strata_tokens::{
    audit_all, status_config, ChartPalette, Density, GlyphStyle, Glyph, IconLibrary, IconName,
    InteractionState, Mode, Status, ThemeConfig, TokenSet,
};

/// Strata - Design Tokens
#[derive(Parser)]
#[command(name = "strata")]
#[command(version = "0.1.0")]
#[command(about = "Strata - tiered design tokens")]
#[command(
    long_about = "Export, audit and query the Strata design tokens: base primitives, semantic aliases, component bundles and their mode variants."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Theme config file (default: <config_dir>/strata/theme.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Rendering mode: light, dark or high-contrast (overrides the config)
    #[arg(short, long, global = true)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the resolved token set
    Tokens {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Layer an interaction state: hover, active, disabled, focus, loading
        #[arg(short, long)]
        state: Option<InteractionState>,

        /// Collapse every motion duration to zero
        #[arg(long)]
        reduced_motion: bool,
    },

    /// Print one token by dotted path, e.g. semantic.text.primary
    Get {
        path: String,
    },

    /// Check that every token traces back to a base value
    Lint,

    /// Show the visual configuration of a status
    Status {
        /// error, warning, success, info, pending or neutral
        name: String,
    },

    /// List a chart palette
    Palette {
        /// primary, categorical, sequential or diverging
        name: String,

        /// Print only the color for this series index (wraps around)
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Show a data-table density preset
    Density {
        /// compact, standard or comfortable
        level: String,
    },

    /// Print an icon glyph
    Icon {
        /// Icon name, e.g. search or chevron-right
        name: String,

        /// outlined or filled (overrides the config)
        #[arg(short, long)]
        library: Option<IconLibrary>,

        /// Print path data only instead of an SVG element
        #[arg(long)]
        paths: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Css,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Render a glyph as a standalone SVG element.
fn glyph_svg(glyph: &Glyph) -> String {
    let paint = match glyph.style {
        GlyphStyle::Stroke => {
            r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#
        }
        GlyphStyle::Fill => r#"fill="currentColor""#,
    };
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" {}>"#,
        Glyph::VIEW_BOX,
        paint
    );
    for d in glyph.paths {
        svg.push_str(&format!(r#"<path d="{}"/>"#, d));
    }
    svg.push_str("</svg>");
    svg
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = ThemeConfig::load_or_default(cli.config.as_deref())?;
    let mode = cli.mode.unwrap_or(config.mode);
    let tokens = TokenSet::resolve(mode).with_reduced_motion(config.reduced_motion);

    match cli.command {
        Commands::Tokens {
            format,
            state,
            reduced_motion,
        } => {
            let mut set = tokens;
            if reduced_motion {
                set = set.with_reduced_motion(true);
            }
            if let Some(state) = state {
                set = set.with_state(state);
            }
            match format {
                Format::Json => println!("{}", set.to_json()?),
                Format::Css => print!("{}", set.to_css_variables()),
            }
        }

        Commands::Get { path } => {
            let leaf = tokens.get(&path)?;
            println!("{}", leaf);
        }

        Commands::Lint => {
            let report = audit_all();
            if report.is_clean() {
                println!("OK: {} tokens trace to base", report.checked);
            } else {
                for finding in &report.findings {
                    eprintln!("  {}", finding);
                }
                anyhow::bail!(
                    "{} of {} tokens failed the audit",
                    report.findings.len(),
                    report.checked
                );
            }
        }

        Commands::Status { name } => {
            let status: Status = name.parse()?;
            let config = status_config(status);
            let tone = tokens.semantic().status_tone(status);

            println!("Status: {}", status);
            println!("  Label: {}", config.label);
            println!("  Severity: {:?}", config.severity);
            println!("  Shape: {:?}", config.shape);
            println!("  Icon: {}", config.icon);
            println!(
                "  Announce: {}",
                if config.announce_assertively {
                    "assertive"
                } else {
                    "polite"
                }
            );
            println!();
            println!("Tone ({}):", mode);
            println!("  Text: {}", tone.text);
            println!("  Background: {}", tone.background);
            println!("  Border: {}", tone.border);
            println!("  Icon: {}", tone.icon);
        }

        Commands::Palette { name, index } => {
            let palette: ChartPalette = name.parse()?;
            let charts = &tokens.domain().charts;
            match index {
                Some(index) => println!("{}", charts.color(palette, index)),
                None => {
                    println!("Palette: {} ({})", palette, mode);
                    for (i, color) in charts.palette(palette).iter().enumerate() {
                        println!("  {}: {}", i, color);
                    }
                }
            }
        }

        Commands::Density { level } => {
            let density: Density = level.parse()?;
            let preset = tokens.domain().data_table.density(density);

            println!("Density: {}", density);
            println!("  Row height: {}", preset.row_height);
            println!("  Cell padding: {}", preset.cell_padding.css());
            println!("  Font size: {}", preset.font_size);
        }

        Commands::Icon {
            name,
            library,
            paths,
        } => {
            let icon: IconName = name.parse()?;
            let library = library.unwrap_or(config.icon_library);
            let Some(glyph) = library.glyph(icon) else {
                anyhow::bail!("Icon '{}' is not available in the {} library", icon, library);
            };

            if paths {
                for d in glyph.paths {
                    println!("{}", d);
                }
            } else {
                println!("{}", glyph_svg(&glyph));
            }
        }
    }

    Ok(())
}
