use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// Layout shared by `transactionTime`, `date` and window bounds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DEBIT" => Some(Self::Debit),
            "CREDIT" => Some(Self::Credit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Debit => "DEBIT",
            Self::Credit => "CREDIT",
        }
    }
}

/// A row from the internal system export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub timestamp: NaiveDateTime,
}

/// A row from the bank statement export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankStatement {
    pub external_id: String,
    pub amount: Decimal,
    pub date: NaiveDateTime,
}

/// Reconciliation period. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// True when `at` lies strictly between the bounds. An inverted window contains nothing.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at > self.start && at < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciliationSummary {
    pub total_processed: usize,
    pub total_matched: usize,
    pub total_unmatched: usize,
    pub unmatched_transactions: Vec<Transaction>,
    pub unmatched_statements: Vec<BankStatement>,
    pub total_discrepancy: Decimal,
}

impl ReconciliationSummary {
    pub fn is_reconciled(&self) -> bool {
        self.total_unmatched == 0 && self.total_discrepancy.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("DEBIT"), Some(TransactionKind::Debit));
        assert_eq!(TransactionKind::parse(" credit "), Some(TransactionKind::Credit));
        assert_eq!(TransactionKind::parse("refund"), None);
        assert_eq!(TransactionKind::parse(""), None);
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        let window = DateWindow::new(at(2023, 1, 1, 0, 0, 0), at(2023, 12, 31, 0, 0, 0));
        assert!(!window.contains(window.start));
        assert!(!window.contains(window.end));
        assert!(window.contains(at(2023, 1, 1, 0, 0, 1)));
        assert!(window.contains(at(2023, 12, 30, 23, 59, 59)));
        assert!(!window.contains(at(2022, 12, 31, 23, 59, 59)));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let window = DateWindow::new(at(2023, 12, 31, 0, 0, 0), at(2023, 1, 1, 0, 0, 0));
        assert!(!window.contains(at(2023, 6, 1, 12, 0, 0)));
    }
}
