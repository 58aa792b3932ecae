use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Check field values against declared constraints.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(propagate_version = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a values file against a schema file.
    #[command(visible_alias = "c")]
    Check(CheckOptions),
    /// List the known constraint kinds.
    #[command(visible_alias = "k")]
    Kinds,
}

#[derive(Debug, Args)]
pub struct CheckOptions {
    /// Schema file declaring fields and their constraints.
    #[arg(short, long)]
    pub schema: PathBuf,

    /// JSON object mapping field names to values.
    #[arg(long)]
    pub values: PathBuf,

    /// Print the report as JSON.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Treat warnings from soft constraints as failures.
    #[arg(long, action = ArgAction::SetTrue)]
    pub strict: bool,
}

impl Arguments {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
