//! ariadoc - accessibility guide demos on the command line
//!
//! Usage:
//!   ariadoc announce <FILE|-> [--id ID] [--group]   - Screen reader announcements
//!   ariadoc contrast <FG> <BG> [--suggest]          - WCAG contrast check
//!   ariadoc convert <HSL>                           - HSL to RGB / HEX / luminance
//!   ariadoc wheel [--steps N]                       - Hue wheel swatches

mod commands;
mod config;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ariadoc_color::Hsl;
use ariadoc_html::HtmlParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "ariadoc", version, about = "Screen reader and color contrast demos")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Announce an element, or the whole page in reading order
    Announce {
        /// HTML file, `-` for stdin
        input: PathBuf,

        /// Element id to announce
        #[arg(long)]
        id: Option<String>,

        /// Aggregate the element as a fieldset group
        #[arg(long, requires = "id")]
        group: bool,
    },

    /// Check the contrast between two HSL colors
    Contrast {
        /// Foreground, e.g. "hsl(0, 0%, 50%)" or "0,0,50"
        #[arg(allow_hyphen_values = true)]
        fg: Hsl,

        /// Background
        #[arg(allow_hyphen_values = true)]
        bg: Hsl,

        /// Suggest a foreground lightness that passes AA
        #[arg(long)]
        suggest: bool,
    },

    /// Convert an HSL color to RGB and HEX
    Convert {
        #[arg(allow_hyphen_values = true)]
        color: Hsl,
    },

    /// Print evenly spaced hues
    Wheel {
        /// Number of hues (config `wheel_steps` by default)
        #[arg(long)]
        steps: Option<usize>,

        #[arg(long, default_value_t = 100.0)]
        saturation: f64,

        #[arg(long, default_value_t = 50.0)]
        lightness: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if cli.json {
        config.output = OutputFormat::Json;
    }

    init_logging(cli.verbose, &config);
    tracing::debug!(?config, "Starting ariadoc");

    let output = match cli.command {
        Command::Announce { input, id, group } => {
            let doc = read_document(&input)?;
            commands::announce(&doc, id.as_deref(), group, &config)?
        }
        Command::Contrast { fg, bg, suggest } => commands::contrast(fg, bg, suggest, &config)?,
        Command::Convert { color } => commands::convert(color, &config)?,
        Command::Wheel { steps, saturation, lightness } => {
            let steps = steps.unwrap_or(config.wheel_steps);
            commands::wheel(steps, saturation, lightness, &config)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// `ARIADOC_LOG` wins, then `-v`, then the config file
fn init_logging(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_env("ARIADOC_LOG").unwrap_or_else(|_| {
        let directives = if verbose { "debug" } else { config.log_filter.as_str() };
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(input: &Path) -> Result<ariadoc_dom::Document> {
    let parser = HtmlParser::new();
    if input.as_os_str() == "-" {
        return parser
            .parse_reader(&mut io::stdin().lock())
            .context("failed to read HTML from stdin");
    }

    let mut file =
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    parser
        .parse_reader(&mut file)
        .with_context(|| format!("failed to read {}", input.display()))
}
