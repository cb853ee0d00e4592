mod cli;
mod error;
mod fmt;
mod loader;
mod models;
mod reconciler;
mod report;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bankrec=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Reconcile {
            transactions,
            statements,
            from,
            to,
            json,
        } => cli::reconcile::run(transactions, statements, from.as_deref(), to.as_deref(), json),
        Commands::Inspect {
            transactions,
            statements,
        } => cli::inspect::run(transactions, statements),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Set {
                transactions,
                statements,
                from,
                to,
            } => cli::config::set(transactions, statements, from, to),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
