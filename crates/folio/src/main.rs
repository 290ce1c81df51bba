//! Folio CLI - build a static portfolio website from a data file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod source;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build a static portfolio website from a data file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create folio.toml and a sample portfolio data file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the portfolio and package it as a zip archive
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Theme to use (light, dark, modern, glassmorphism)
        #[arg(short, long)]
        theme: Option<String>,

        /// Minify the stylesheet
        #[arg(long)]
        minify: bool,

        /// Do not HTML-escape portfolio text
        #[arg(long)]
        raw_html: bool,
    },

    /// Generate the site unpacked and preview it in a browser
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to generate into and serve
        #[arg(short, long, default_value = "site")]
        dir: PathBuf,
    },

    /// List available themes
    Themes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Build {
            output,
            theme,
            minify,
            raw_html,
        } => {
            let overrides = commands::build::Overrides {
                output,
                theme,
                minify: minify.then_some(true),
                escape_html: raw_html.then_some(false),
            };
            commands::build::run(&cli.config, overrides).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(&cli.config, port, dir).await?;
        }
        Commands::Themes => {
            commands::themes::run();
        }
    }

    Ok(())
}
