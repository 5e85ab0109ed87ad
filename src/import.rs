//! Loads expense records from JSON or CSV files.
//!
//! JSON files carry the same shape as the expense API (an array of
//! camelCase records). CSV files need a header row with at least
//! `id,title,amount,category,date`; the bookkeeping columns are optional.

use std::path::Path;

use crate::{Error, expense::Expense};

/// Load expenses from `path`, picking the format from the file extension.
///
/// Files ending in `.csv` are parsed as CSV; everything else is treated as
/// JSON.
///
/// # Errors
/// Returns [Error::Io] if the file cannot be read, or
/// [Error::InvalidJson]/[Error::InvalidCsv] if it cannot be parsed.
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>, Error> {
    let text = std::fs::read_to_string(path)?;

    if path.extension().is_some_and(|ext| ext == "csv") {
        parse_csv(&text)
    } else {
        parse_json(&text)
    }
}

/// Parse a JSON array of expense records.
///
/// # Errors
/// Returns [Error::InvalidJson] if the text is not a valid array of
/// records.
pub fn parse_json(text: &str) -> Result<Vec<Expense>, Error> {
    serde_json::from_str(text).map_err(|error| Error::InvalidJson(error.to_string()))
}

/// Parse CSV text with a header row into expense records.
///
/// # Errors
/// Returns [Error::InvalidCsv] if a row cannot be decoded as an expense.
pub fn parse_csv(text: &str) -> Result<Vec<Expense>, Error> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    reader
        .deserialize()
        .map(|row| row.map_err(|error| Error::InvalidCsv(error.to_string())))
        .collect()
}
