//! Plain-text report for terminals.

use super::{ResultSink, SearchSummary};
use crate::config::FieldNames;
use crate::record::ImageRecord;
use anyhow::Result;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UNKNOWN: &str = "Unknown";

/// Writes the match listing (when verbose) followed by a summary.
///
/// The listing is headed by the match count, so entries are buffered
/// until `finish`.
pub struct TextSink {
    writer: BufWriter<Box<dyn Write + Send>>,
    fields: FieldNames,
    verbose: bool,
    entries: String,
}

impl TextSink {
    pub fn new<P: AsRef<Path>>(path: P, fields: FieldNames, verbose: bool) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_writer(Box::new(file), fields, verbose))
    }

    pub fn stdout(fields: FieldNames, verbose: bool) -> Self {
        Self::with_writer(Box::new(std::io::stdout()), fields, verbose)
    }

    fn with_writer(writer: Box<dyn Write + Send>, fields: FieldNames, verbose: bool) -> Self {
        Self {
            writer: BufWriter::new(writer),
            fields,
            verbose,
            entries: String::new(),
        }
    }

    fn describe(&self, record: &ImageRecord) -> Result<String> {
        let field = |name: &str| record.get(name).unwrap_or(UNKNOWN);
        let mut entry = String::new();

        writeln!(
            entry,
            "- {} ({}, {}MB)",
            field(&self.fields.filename),
            field(&self.fields.file_type),
            field(&self.fields.size)
        )?;
        if let Some(coord) = record.coordinates() {
            writeln!(entry, "  Coordinates: {:.5}, {:.5}", coord.x, coord.y)?;
        }
        if !record.tags().is_empty() {
            writeln!(entry, "  Tags: {}", record.tags().join(", "))?;
        }
        writeln!(entry)?;
        Ok(entry)
    }
}

impl ResultSink for TextSink {
    fn add_record(&mut self, record: &ImageRecord) -> Result<()> {
        if self.verbose {
            let entry = self.describe(record)?;
            self.entries.push_str(&entry);
        }
        Ok(())
    }

    fn finish(&mut self, summary: &SearchSummary) -> Result<()> {
        if self.verbose {
            if summary.found == 0 {
                writeln!(self.writer, "No images found matching the criteria.")?;
            } else {
                writeln!(self.writer, "Found {} image(s):", summary.found)?;
                self.writer.write_all(self.entries.as_bytes())?;
            }
        }

        writeln!(self.writer, "\nSummary:")?;
        writeln!(self.writer, "Records loaded: {}", summary.loaded)?;
        writeln!(self.writer, "Records found: {}", summary.found)?;
        self.writer.flush()?;
        Ok(())
    }
}
