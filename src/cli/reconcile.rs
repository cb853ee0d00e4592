use std::path::{Path, PathBuf};

use crate::cli::resolve_inputs;
use crate::error::Result;
use crate::loader::{file_checksum, load_statements, load_transactions};
use crate::reconciler;
use crate::report::{format_summary, summary_json, InputSource};
use crate::settings::{load_settings, resolve_window};

fn source(path: &Path, rows: usize) -> Result<InputSource> {
    Ok(InputSource {
        path: path.display().to_string(),
        sha256: file_checksum(path)?,
        rows,
    })
}

pub fn run(
    transactions: Option<PathBuf>,
    statements: Option<PathBuf>,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let settings = load_settings();
    let window = resolve_window(&settings, from, to)?;
    let (txn_path, stmt_path) = resolve_inputs(&settings, transactions, statements);

    let txns = load_transactions(&txn_path)?;
    let stmts = load_statements(&stmt_path)?;
    let summary = reconciler::reconcile(&txns, &stmts, &window);

    if json {
        let txn_source = source(&txn_path, txns.len())?;
        let stmt_source = source(&stmt_path, stmts.len())?;
        println!("{}", summary_json(&summary, &window, &txn_source, &stmt_source)?);
    } else {
        print!("{}", format_summary(&summary, &window));
    }
    Ok(())
}
