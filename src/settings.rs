use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ReconError, Result};
use crate::models::{DateWindow, TIMESTAMP_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
    #[serde(default = "default_statements_file")]
    pub statements_file: String,
    #[serde(default)]
    pub window_start: Option<String>,
    #[serde(default)]
    pub window_end: Option<String>,
}

fn default_transactions_file() -> String {
    "system_transactions.csv".to_string()
}

fn default_statements_file() -> String {
    "bank_statements.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transactions_file: default_transactions_file(),
            statements_file: default_statements_file(),
            window_start: None,
            window_end: None,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bankrec")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Parse a window bound: `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD` meaning midnight.
pub fn parse_bound(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Ok(at);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ReconError::InvalidWindow(raw.to_string()))
}

/// Resolve the window from CLI overrides, falling back to saved settings.
pub fn resolve_window(
    settings: &Settings,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<DateWindow> {
    let start = from
        .or(settings.window_start.as_deref())
        .ok_or(ReconError::MissingWindow)?;
    let end = to
        .or(settings.window_end.as_deref())
        .ok_or(ReconError::MissingWindow)?;
    Ok(DateWindow::new(parse_bound(start)?, parse_bound(end)?))
}
