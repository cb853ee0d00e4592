use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp on line {line}: {value:?} (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Invalid amount on line {line}: {value:?}")]
    InvalidAmount { line: u64, value: String },

    #[error("Invalid transaction type on line {line}: {value:?} (expected DEBIT or CREDIT)")]
    InvalidKind { line: u64, value: String },

    #[error("Invalid window bound: {0} (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)")]
    InvalidWindow(String),

    #[error("No reconciliation window: pass --from and --to or set them with `bankrec config set`")]
    MissingWindow,
}

pub type Result<T> = std::result::Result<T, ReconError>;
