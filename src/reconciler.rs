use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{BankStatement, DateWindow, ReconciliationSummary, Transaction};

/// Exact amount and instant equality. Symmetric by construction.
pub fn is_match(txn: &Transaction, stmt: &BankStatement) -> bool {
    txn.amount == stmt.amount && txn.timestamp == stmt.date
}

/// Reconcile system transactions against bank statements inside `window`.
///
/// Matching is not bijective: a statement can satisfy several transactions and
/// nothing is consumed once matched. Output lists keep the input order.
pub fn reconcile(
    transactions: &[Transaction],
    statements: &[BankStatement],
    window: &DateWindow,
) -> ReconciliationSummary {
    let transactions: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| window.contains(t.timestamp))
        .collect();
    let statements: Vec<&BankStatement> = statements
        .iter()
        .filter(|s| window.contains(s.date))
        .collect();

    let mut matched_ids: HashSet<&str> = HashSet::new();
    let mut total_matched = 0usize;
    let mut unmatched_transactions = Vec::new();
    for txn in &transactions {
        if statements.iter().any(|stmt| is_match(txn, stmt)) {
            matched_ids.insert(txn.id.as_str());
            total_matched += 1;
        } else {
            unmatched_transactions.push((*txn).clone());
        }
    }

    let unmatched_statements: Vec<BankStatement> = statements
        .iter()
        .filter(|stmt| !transactions.iter().any(|txn| is_match(txn, stmt)))
        .map(|stmt| (*stmt).clone())
        .collect();

    // Every same-instant statement with a different amount counts, so one
    // transaction can contribute several times. Saturates at Decimal::MAX.
    let mut total_discrepancy = Decimal::ZERO;
    for txn in transactions.iter().filter(|t| !matched_ids.contains(t.id.as_str())) {
        for stmt in &statements {
            if txn.amount != stmt.amount && txn.timestamp == stmt.date {
                let diff = txn
                    .amount
                    .checked_sub(stmt.amount)
                    .map(|d| d.abs())
                    .unwrap_or(Decimal::MAX);
                total_discrepancy = total_discrepancy
                    .checked_add(diff)
                    .unwrap_or(Decimal::MAX);
            }
        }
    }

    let total_unmatched = unmatched_transactions.len() + unmatched_statements.len();

    tracing::debug!(
        processed = transactions.len(),
        statements = statements.len(),
        matched = total_matched,
        unmatched = total_unmatched,
        discrepancy = %total_discrepancy,
        "reconciliation complete"
    );

    ReconciliationSummary {
        total_processed: transactions.len(),
        total_matched,
        total_unmatched,
        unmatched_transactions,
        unmatched_statements,
        total_discrepancy,
    }
}
