//! Balance CLI Application
//!
//! Command-line front end for the Balance routine planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use balance_core::StoreBuilder;
use clap::Parser;
use cli::Cli;
use jiff::Zoned;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open the Balance database")?;

    let today = Zoned::now().date();
    let mut cli = Cli::new(store, TerminalRenderer::new(!no_color), today);

    info!("Balance started for {today}");

    match command.unwrap_or(Today) {
        Today => cli.today(),
        Toggle(args) => cli.toggle(args),
        Next => cli.next(),
        Reset => cli.reset(),
        Onboard(args) => cli.onboard(args),
        Profile => cli.profile(),
    }
}
