use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::{ReconError, Result};
use crate::models::{BankStatement, Transaction, TransactionKind, TIMESTAMP_FORMAT};

// ---------------------------------------------------------------------------
// Raw CSV rows
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TransactionRow {
    #[serde(rename = "trxID")]
    id: String,
    amount: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "transactionTime")]
    transaction_time: String,
}

#[derive(Debug, Deserialize)]
struct StatementRow {
    #[serde(rename = "unique_identifier")]
    external_id: String,
    amount: String,
    date: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

pub fn file_checksum(file_path: &Path) -> Result<String> {
    let data = std::fs::read(file_path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// System transactions: trxID,amount,type,transactionTime
// ---------------------------------------------------------------------------

pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut transactions = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = line_of(&record);
        let row: TransactionRow = record.deserialize(Some(&headers))?;

        let amount = parse_amount(&row.amount).ok_or_else(|| ReconError::InvalidAmount {
            line,
            value: row.amount.clone(),
        })?;
        let kind = TransactionKind::parse(&row.kind).ok_or_else(|| ReconError::InvalidKind {
            line,
            value: row.kind.clone(),
        })?;
        let timestamp =
            parse_timestamp(&row.transaction_time).ok_or_else(|| ReconError::InvalidTimestamp {
                line,
                value: row.transaction_time.clone(),
            })?;

        transactions.push(Transaction {
            id: row.id,
            amount,
            kind,
            timestamp,
        });
    }
    Ok(transactions)
}

pub fn load_transactions(file_path: &Path) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(file_path)?;
    let transactions = read_transactions(std::io::BufReader::new(file))?;
    tracing::debug!(path = %file_path.display(), rows = transactions.len(), "loaded system transactions");
    Ok(transactions)
}

// ---------------------------------------------------------------------------
// Bank statements: unique_identifier,amount,date
// ---------------------------------------------------------------------------

pub fn read_statements<R: Read>(reader: R) -> Result<Vec<BankStatement>> {
    let mut rdr = csv_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut statements = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = line_of(&record);
        let row: StatementRow = record.deserialize(Some(&headers))?;

        let amount = parse_amount(&row.amount).ok_or_else(|| ReconError::InvalidAmount {
            line,
            value: row.amount.clone(),
        })?;
        let date = parse_timestamp(&row.date).ok_or_else(|| ReconError::InvalidTimestamp {
            line,
            value: row.date.clone(),
        })?;

        statements.push(BankStatement {
            external_id: row.external_id,
            amount,
            date,
        });
    }
    Ok(statements)
}

pub fn load_statements(file_path: &Path) -> Result<Vec<BankStatement>> {
    let file = std::fs::File::open(file_path)?;
    let statements = read_statements(std::io::BufReader::new(file))?;
    tracing::debug!(path = %file_path.display(), rows = statements.len(), "loaded bank statements");
    Ok(statements)
}
