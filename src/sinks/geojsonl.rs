use super::{ResultSink, SearchSummary, record_feature};
use crate::record::ImageRecord;
use anyhow::Result;
use geojson::GeoJson;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GeoJsonlSink {
    writer: BufWriter<Box<dyn Write + Send>>,
}

impl GeoJsonlSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(Box::new(file)),
        })
    }

    pub fn stdout() -> Result<Self> {
        Ok(Self {
            writer: BufWriter::new(Box::new(std::io::stdout())),
        })
    }
}

impl ResultSink for GeoJsonlSink {
    fn add_record(&mut self, record: &ImageRecord) -> Result<()> {
        let geojson = GeoJson::Feature(record_feature(record));
        serde_json::to_writer(&mut self.writer, &geojson)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, summary: &SearchSummary) -> Result<()> {
        self.writer.flush()?;
        tracing::info!(
            "Records loaded: {}, records found: {}",
            summary.loaded,
            summary.found
        );
        Ok(())
    }
}
