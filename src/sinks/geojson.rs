use super::{ResultSink, SearchSummary, record_feature};
use crate::record::ImageRecord;
use anyhow::Result;
use geojson::GeoJson;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const COLLECTION_OPEN: &[u8] = b"{\"type\":\"FeatureCollection\",\"features\":[\n";
const COLLECTION_CLOSE: &[u8] = b"\n]}\n";

/// Streams matches into a single FeatureCollection file.
pub struct GeoJsonSink {
    writer: BufWriter<File>,
    first_feature: bool,
}

impl GeoJsonSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(COLLECTION_OPEN)?;

        Ok(Self {
            writer,
            first_feature: true,
        })
    }
}

impl ResultSink for GeoJsonSink {
    fn add_record(&mut self, record: &ImageRecord) -> Result<()> {
        if !self.first_feature {
            writeln!(self.writer, ",")?;
        }
        self.first_feature = false;

        let geojson = GeoJson::Feature(record_feature(record));
        serde_json::to_writer(&mut self.writer, &geojson)?;
        Ok(())
    }

    fn finish(&mut self, summary: &SearchSummary) -> Result<()> {
        self.writer.write_all(COLLECTION_CLOSE)?;
        self.writer.flush()?;
        tracing::info!(
            "Records loaded: {}, records found: {}",
            summary.loaded,
            summary.found
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldNames;
    use tempfile::NamedTempFile;

    fn record(name: &str, coordinate: &str) -> ImageRecord {
        ImageRecord::from_row(
            [("Filename", name), ("(Center) Coordinate", coordinate)],
            &FieldNames::default(),
        )
        .unwrap()
    }

    fn read_collection(path: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn creates_valid_geojson_structure() {
        let temp_file = NamedTempFile::with_suffix(".geojson").unwrap();
        let mut sink = GeoJsonSink::new(temp_file.path()).unwrap();

        sink.add_record(&record("Test", "0.0, 0.0")).unwrap();
        sink.finish(&SearchSummary { loaded: 1, found: 1 }).unwrap();

        let parsed = read_collection(temp_file.path());
        assert_eq!(parsed["type"], "FeatureCollection");
        assert_eq!(parsed["features"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn writes_multiple_features_with_commas() {
        let temp_file = NamedTempFile::with_suffix(".geojson").unwrap();
        let mut sink = GeoJsonSink::new(temp_file.path()).unwrap();

        sink.add_record(&record("First", "0.0, 0.0")).unwrap();
        sink.add_record(&record("Second", "36° 00' N, 138° 00' E")).unwrap();
        sink.add_record(&record("Third", "not a place")).unwrap();
        sink.finish(&SearchSummary { loaded: 3, found: 3 }).unwrap();

        let parsed = read_collection(temp_file.path());
        let features = parsed["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[1]["geometry"]["coordinates"][0], 138.0);
        assert!(features[2]["geometry"].is_null());
    }

    #[test]
    fn empty_collection_is_valid() {
        let temp_file = NamedTempFile::with_suffix(".geojson").unwrap();
        let mut sink = GeoJsonSink::new(temp_file.path()).unwrap();
        sink.finish(&SearchSummary::default()).unwrap();

        let parsed = read_collection(temp_file.path());
        assert!(parsed["features"].as_array().unwrap().is_empty());
    }
}
