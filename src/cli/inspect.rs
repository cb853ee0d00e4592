use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::cli::resolve_inputs;
use crate::error::Result;
use crate::fmt::timestamp;
use crate::loader::{file_checksum, load_statements, load_transactions};
use crate::settings::load_settings;

fn span(times: impl Iterator<Item = NaiveDateTime> + Clone) -> String {
    match (times.clone().min(), times.max()) {
        (Some(first), Some(last)) => format!("{} .. {}", timestamp(first), timestamp(last)),
        _ => "(empty)".to_string(),
    }
}

fn print_file(label: &str, path: &Path, rows: usize, range: String) -> Result<()> {
    println!("{label}");
    println!("  File:     {}", path.display());
    println!("  Rows:     {rows}");
    println!("  Range:    {range}");
    println!("  SHA-256:  {}", file_checksum(path)?);
    Ok(())
}

pub fn run(transactions: Option<PathBuf>, statements: Option<PathBuf>) -> Result<()> {
    let settings = load_settings();
    let (txn_path, stmt_path) = resolve_inputs(&settings, transactions, statements);

    let txns = load_transactions(&txn_path)?;
    let stmts = load_statements(&stmt_path)?;

    print_file(
        "System transactions",
        &txn_path,
        txns.len(),
        span(txns.iter().map(|t| t.timestamp)),
    )?;
    println!();
    print_file(
        "Bank statements",
        &stmt_path,
        stmts.len(),
        span(stmts.iter().map(|s| s.date)),
    )?;
    Ok(())
}
