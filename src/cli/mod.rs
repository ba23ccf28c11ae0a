use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A daily gratitude and intention journal
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the journal program and begin the practice
    Setup(SetupArgs),
    /// Record today's gratitudes and intentions
    Record(RecordArgs),
    /// Show program progress, entry count, and streaks
    Status,
    /// List recorded entries
    History,
    /// Export all entries as CSV
    Export(ExportArgs),
    /// Show or change reminder settings
    Settings(SettingsArgs),
    /// Run the daily reminder loop in the foreground
    Remind,
    /// Delete the program configuration and all entries
    Reset(ResetArgs),
}

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// First day of the practice (YYYY-MM-DD)
    #[clap(long, value_name = "DATE")]
    pub start_date: String,

    /// Daily reminder time (HH:MM, 24-hour)
    #[clap(long, value_name = "TIME")]
    pub reminder: String,

    /// Program length in days; omit for an open-ended practice
    #[clap(long, value_name = "DAYS")]
    pub length: Option<u32>,

    /// Enable daily reminder notifications
    #[clap(long)]
    pub notifications: bool,

    /// Replace an existing program and delete its entries
    #[clap(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// A gratitude statement; repeat for up to ten
    #[clap(short = 'g', long = "gratitude", value_name = "TEXT")]
    pub gratitudes: Vec<String>,

    /// An intention statement; repeat for up to ten
    #[clap(short = 'i', long = "intention", value_name = "TEXT")]
    pub intentions: Vec<String>,

    /// Reflection after the gratitude list
    #[clap(long, value_name = "TEXT")]
    pub reflection1: Option<String>,

    /// Reflection after the intention list
    #[clap(long, value_name = "TEXT")]
    pub reflection2: Option<String>,

    /// Closing thoughts
    #[clap(long, value_name = "TEXT")]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write the CSV to this file instead of stdout
    #[clap(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Change the daily reminder time (HH:MM, 24-hour)
    #[clap(long, value_name = "TIME")]
    pub reminder: Option<String>,

    /// Turn reminder notifications on or off
    #[clap(long, value_name = "BOOL")]
    pub notifications: Option<bool>,
}

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation message and delete immediately
    #[clap(short = 'y', long)]
    pub yes: bool,
}
