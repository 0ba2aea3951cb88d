//! svgvar - turn hard-coded SVG colors into themeable CSS variables.

mod cli;
mod config;
mod logger;
mod pipeline;
mod svg;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Build { build_args } => {
            logger::set_verbose(build_args.verbose);
            let config = ProjectConfig::load(&cli.config, build_args)?;
            cli::build::build_library(&config).map(|_| ())
        }
        Commands::Extract { args } => {
            logger::set_verbose(args.verbose);
            cli::extract::extract_file(args)
        }
    }
}
