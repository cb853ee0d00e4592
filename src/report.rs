use colored::Colorize;
use comfy_table::{Cell, Table};
use serde::Serialize;

use crate::error::Result;
use crate::fmt::{money, timestamp};
use crate::models::{DateWindow, ReconciliationSummary};

/// Provenance of one input file, shown in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct InputSource {
    pub path: String,
    pub sha256: String,
    pub rows: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    window: &'a DateWindow,
    transactions: &'a InputSource,
    statements: &'a InputSource,
    summary: &'a ReconciliationSummary,
}

fn window_line(window: &DateWindow) -> String {
    format!(
        "Window: {} .. {} (exclusive)",
        timestamp(window.start),
        timestamp(window.end)
    )
}

pub fn format_summary(summary: &ReconciliationSummary, window: &DateWindow) -> String {
    let mut out = String::new();
    out.push_str(&window_line(window));
    out.push('\n');

    let mut totals = Table::new();
    totals.set_header(vec!["Metric", "Value"]);
    totals.add_row(vec![Cell::new("Processed"), Cell::new(summary.total_processed)]);
    totals.add_row(vec![Cell::new("Matched"), Cell::new(summary.total_matched)]);
    totals.add_row(vec![Cell::new("Unmatched"), Cell::new(summary.total_unmatched)]);
    totals.add_row(vec![
        Cell::new("Discrepancy"),
        Cell::new(money(summary.total_discrepancy)),
    ]);
    out.push_str(&totals.to_string());
    out.push('\n');

    out.push_str(&format!("\n{}\n", "Unmatched system transactions".bold()));
    if summary.unmatched_transactions.is_empty() {
        out.push_str("  none\n");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Type", "Amount", "Time"]);
        for t in &summary.unmatched_transactions {
            table.add_row(vec![
                Cell::new(&t.id),
                Cell::new(t.kind.label()),
                Cell::new(money(t.amount)),
                Cell::new(timestamp(t.timestamp)),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", "Unmatched bank statements".bold()));
    if summary.unmatched_statements.is_empty() {
        out.push_str("  none\n");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Amount", "Date"]);
        for s in &summary.unmatched_statements {
            table.add_row(vec![
                Cell::new(&s.external_id),
                Cell::new(money(s.amount)),
                Cell::new(timestamp(s.date)),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    let verdict = if summary.is_reconciled() {
        "RECONCILED".green().bold()
    } else {
        "DISCREPANCIES FOUND".red().bold()
    };
    out.push_str(&format!("\n{verdict}\n"));
    out
}

pub fn summary_json(
    summary: &ReconciliationSummary,
    window: &DateWindow,
    transactions: &InputSource,
    statements: &InputSource,
) -> Result<String> {
    let report = JsonReport {
        window,
        transactions,
        statements,
        summary,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankStatement, Transaction, TransactionKind, TIMESTAMP_FORMAT};
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ts(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).unwrap()
    }

    fn window() -> DateWindow {
        DateWindow::new(ts("2023-01-01 00:00:00"), ts("2023-12-31 00:00:00"))
    }

    fn mismatch_summary() -> ReconciliationSummary {
        ReconciliationSummary {
            total_processed: 1,
            total_matched: 0,
            total_unmatched: 2,
            unmatched_transactions: vec![Transaction {
                id: "T1".to_string(),
                amount: dec!(100.00),
                kind: TransactionKind::Credit,
                timestamp: ts("2023-05-01 10:00:00"),
            }],
            unmatched_statements: vec![BankStatement {
                external_id: "B1".to_string(),
                amount: dec!(90.00),
                date: ts("2023-05-01 10:00:00"),
            }],
            total_discrepancy: dec!(10.00),
        }
    }

    fn source(path: &str, rows: usize) -> InputSource {
        InputSource {
            path: path.to_string(),
            sha256: "ab".repeat(32),
            rows,
        }
    }

    #[test]
    fn test_format_summary_lists_unmatched() {
        colored::control::set_override(false);
        let text = format_summary(&mismatch_summary(), &window());
        assert!(text.contains("Window: 2023-01-01 00:00:00 .. 2023-12-31 00:00:00"));
        assert!(text.contains("Discrepancy"));
        assert!(text.contains("$10.00"));
        assert!(text.contains("T1"));
        assert!(text.contains("CREDIT"));
        assert!(text.contains("B1"));
        assert!(text.contains("$90.00"));
        assert!(text.contains("DISCREPANCIES FOUND"));
    }

    #[test]
    fn test_format_summary_reconciled() {
        colored::control::set_override(false);
        let summary = ReconciliationSummary {
            total_processed: 3,
            total_matched: 3,
            total_unmatched: 0,
            unmatched_transactions: vec![],
            unmatched_statements: vec![],
            total_discrepancy: Decimal::ZERO,
        };
        let text = format_summary(&summary, &window());
        assert_eq!(text.matches("  none").count(), 2);
        assert!(text.contains("RECONCILED"));
        assert!(!text.contains("DISCREPANCIES FOUND"));
    }

    #[test]
    fn test_summary_json_shape() {
        let json = summary_json(
            &mismatch_summary(),
            &window(),
            &source("system_transactions.csv", 1),
            &source("bank_statements.csv", 1),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total_processed"], 1);
        assert_eq!(value["summary"]["total_unmatched"], 2);
        assert_eq!(value["summary"]["total_discrepancy"], "10.00");
        assert_eq!(value["summary"]["unmatched_transactions"][0]["kind"], "CREDIT");
        assert_eq!(value["summary"]["unmatched_statements"][0]["external_id"], "B1");
        assert_eq!(value["window"]["start"], "2023-01-01T00:00:00");
        assert_eq!(value["statements"]["path"], "bank_statements.csv");
    }
}
