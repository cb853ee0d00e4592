pub mod config;
pub mod inspect;
pub mod reconcile;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::Settings;

/// Input paths from flags, falling back to saved settings.
pub(crate) fn resolve_inputs(
    settings: &Settings,
    transactions: Option<PathBuf>,
    statements: Option<PathBuf>,
) -> (PathBuf, PathBuf) {
    (
        transactions.unwrap_or_else(|| PathBuf::from(&settings.transactions_file)),
        statements.unwrap_or_else(|| PathBuf::from(&settings.statements_file)),
    )
}

#[derive(Parser)]
#[command(
    name = "bankrec",
    about = "Reconcile system transactions against bank statements."
)]
pub struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match transactions to statements inside a date window and report the gaps.
    Reconcile {
        /// System transactions CSV (trxID,amount,type,transactionTime)
        #[arg(long)]
        transactions: Option<PathBuf>,
        /// Bank statements CSV (unique_identifier,amount,date)
        #[arg(long)]
        statements: Option<PathBuf>,
        /// Window start, exclusive: YYYY-MM-DD or YYYY-MM-DD HH:MM:SS
        #[arg(long = "from")]
        from: Option<String>,
        /// Window end, exclusive: YYYY-MM-DD or YYYY-MM-DD HH:MM:SS
        #[arg(long = "to")]
        to: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load both input files and show what they contain without reconciling.
    Inspect {
        #[arg(long)]
        transactions: Option<PathBuf>,
        #[arg(long)]
        statements: Option<PathBuf>,
    },
    /// Show or change saved defaults.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the settings file location and values.
    Show,
    /// Save default input paths and window bounds.
    Set {
        #[arg(long)]
        transactions: Option<String>,
        #[arg(long)]
        statements: Option<String>,
        /// Default window start: YYYY-MM-DD or YYYY-MM-DD HH:MM:SS
        #[arg(long = "from")]
        from: Option<String>,
        /// Default window end: YYYY-MM-DD or YYYY-MM-DD HH:MM:SS
        #[arg(long = "to")]
        to: Option<String>,
    },
}
