use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::FieldNames;
use crate::record::ImageRecord;

const BOM: char = '\u{feff}';

/// Load every non-empty row of an image library CSV.
pub fn load_records(path: &Path, fields: &FieldNames) -> Result<Vec<ImageRecord>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            bail!("Loader: CSV file '{}' not found", path.display())
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Loader: Failed to read {:?}", path));
        }
    };

    let records = parse_records(&content, fields)?;
    tracing::info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Parse CSV text with a header row into records.
///
/// Rows may be shorter or longer than the header; missing cells are
/// treated as blank and surplus cells are ignored.
pub fn parse_records(content: &str, fields: &FieldNames) -> Result<Vec<ImageRecord>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .context("Loader: Failed to read CSV headers")?
        .clone();

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Loader: Failed to parse CSV row {}", index + 1))?;
        match ImageRecord::from_row(headers.iter().zip(row.iter()), fields) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::info!("Dropped {} empty rows", dropped);
    }
    Ok(records)
}
