//! vstheme CLI: merge theme color values with their Markdown documentation.
//!
//! Reads bullet-key docs and a JSON color theme, writes the reconciled
//! `key → {color, meaning}` map, and previews it as a table.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
