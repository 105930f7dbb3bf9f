use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{OnboardArgs, ToggleArgs};

/// Daily routine planner for the terminal
///
/// Balance shows today's routines grouped by life area, lets you tick them
/// off, and walks you through an onboarding that records which areas matter
/// to you and when you are usually free.
#[derive(Parser)]
#[command(version, about, name = "balance")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/balance/balance.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Balance CLI
///
/// Without a command, `today` is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show today's progress and schedules by area
    #[command(alias = "t")]
    Today,
    /// Mark a schedule done, or back to pending
    #[command(alias = "x")]
    Toggle(ToggleArgs),
    /// Show the next pending schedule
    #[command(alias = "n")]
    Next,
    /// Restore today's built-in schedules
    Reset,
    /// Record focus areas, priorities and availability
    #[command(alias = "o")]
    Onboard(OnboardArgs),
    /// Show the stored onboarding result
    #[command(alias = "p")]
    Profile,
}
