use crate::error::Result;
use crate::settings::{load_settings, parse_bound, save_settings, settings_path};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings:      {}", settings_path().display());
    println!("Transactions:  {}", settings.transactions_file);
    println!("Statements:    {}", settings.statements_file);
    println!("Window start:  {}", settings.window_start.as_deref().unwrap_or("(not set)"));
    println!("Window end:    {}", settings.window_end.as_deref().unwrap_or("(not set)"));
    Ok(())
}

pub fn set(
    transactions: Option<String>,
    statements: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();
    if let Some(path) = transactions {
        settings.transactions_file = path;
    }
    if let Some(path) = statements {
        settings.statements_file = path;
    }
    if let Some(bound) = from {
        parse_bound(&bound)?;
        settings.window_start = Some(bound);
    }
    if let Some(bound) = to {
        parse_bound(&bound)?;
        settings.window_end = Some(bound);
    }
    save_settings(&settings)?;
    println!("Saved {}", settings_path().display());
    Ok(())
}
