use anyhow::Result;
use geo_types::{Geometry, Point};
use ::geojson::Feature;
use serde_json::{Map, Value};

use crate::record::ImageRecord;

pub mod geojson;
pub mod geojsonl;
pub mod text;

pub use self::geojson::GeoJsonSink;
pub use self::geojsonl::GeoJsonlSink;
pub use self::text::TextSink;

/// Totals reported once all matches have been written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub loaded: usize,
    pub found: usize,
}

pub trait ResultSink {
    fn add_record(&mut self, record: &ImageRecord) -> Result<()>;
    fn finish(&mut self, summary: &SearchSummary) -> Result<()>;
}

/// GeoJSON feature for a record: a `[lon, lat]` point when the record has
/// a coordinate, every populated field as a string property, and the
/// parsed user tags as a `tags` array.
pub fn record_feature(record: &ImageRecord) -> Feature {
    let geometry = record.coordinates().map(|coord| {
        let point = Point::new(coord.y, coord.x);
        ::geojson::Geometry::from(&Geometry::Point(point))
    });

    let mut properties: Map<String, Value> = record
        .fields()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect();
    properties.insert(
        "tags".to_string(),
        Value::Array(record.tags().iter().cloned().map(Value::String).collect()),
    );

    Feature {
        bbox: None,
        geometry,
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
