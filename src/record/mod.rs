//! Image metadata records.
//!
//! A record is built once from a CSV row and is read-only afterwards.
//! The library's well-known columns get typed getters; anything else
//! lands in an overflow map so unknown columns stay searchable.

mod predicate;
mod tags;

use geo_types::Coord;
use std::collections::BTreeMap;

use crate::config::FieldNames;
use crate::geofence::parse_coordinate;

pub use tags::parse_tags;

const COLUMN_COUNT: usize = 13;

/// Well-known image library columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Column {
    Filename,
    Type,
    SizeMb,
    ImageX,
    ImageY,
    Dpi,
    Coordinate,
    Favorite,
    Continent,
    BitColor,
    Alpha,
    HockeyTeam,
    UserTags,
}

impl Column {
    /// All columns in CSV header order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Filename,
        Column::Type,
        Column::SizeMb,
        Column::ImageX,
        Column::ImageY,
        Column::Dpi,
        Column::Coordinate,
        Column::Favorite,
        Column::Continent,
        Column::BitColor,
        Column::Alpha,
        Column::HockeyTeam,
        Column::UserTags,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Filename => "Filename",
            Column::Type => "Type",
            Column::SizeMb => "Image Size (MB)",
            Column::ImageX => "Image X",
            Column::ImageY => "Image Y",
            Column::Dpi => "DPI",
            Column::Coordinate => "(Center) Coordinate",
            Column::Favorite => "Favorite",
            Column::Continent => "Continent",
            Column::BitColor => "Bit color",
            Column::Alpha => "Alpha",
            Column::HockeyTeam => "Hockey Team",
            Column::UserTags => "User Tags",
        }
    }

    pub fn from_header(name: &str) -> Option<Self> {
        Column::ALL.into_iter().find(|col| col.header() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    known: [Option<String>; COLUMN_COUNT],
    extra: BTreeMap<String, String>,
    tags: Vec<String>,
    location: Option<String>,
}

impl ImageRecord {
    /// Build a record from `(header, value)` pairs.
    ///
    /// Blank values are dropped. Returns `None` when no value is left.
    pub fn from_row<'a, I>(row: I, fields: &FieldNames) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = ImageRecord {
            known: Default::default(),
            extra: BTreeMap::new(),
            tags: Vec::new(),
            location: None,
        };
        let mut populated = false;

        for (name, value) in row {
            if value.trim().is_empty() {
                continue;
            }
            populated = true;
            match Column::from_header(name) {
                Some(col) => record.known[col.index()] = Some(value.to_string()),
                None => {
                    record.extra.insert(name.to_string(), value.to_string());
                }
            }
        }

        if !populated {
            return None;
        }

        record.tags = record.get(&fields.tags).map(parse_tags).unwrap_or_default();
        record.location = record.get(&fields.coordinate).map(str::to_string);
        Some(record)
    }

    /// Look up a raw value by column name.
    pub fn get(&self, field: &str) -> Option<&str> {
        match Column::from_header(field) {
            Some(col) => self.column(col),
            None => self.extra.get(field).map(String::as_str),
        }
    }

    pub(crate) fn column(&self, col: Column) -> Option<&str> {
        self.known[col.index()].as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.column(Column::Filename)
    }

    pub fn file_type(&self) -> Option<&str> {
        self.column(Column::Type)
    }

    pub fn size_mb(&self) -> Option<f64> {
        self.column(Column::SizeMb)?.trim().parse().ok()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let x = self.column(Column::ImageX)?.trim().parse().ok()?;
        let y = self.column(Column::ImageY)?.trim().parse().ok()?;
        Some((x, y))
    }

    pub fn dpi(&self) -> Option<u32> {
        self.column(Column::Dpi)?.trim().parse().ok()
    }

    pub fn continent(&self) -> Option<&str> {
        self.column(Column::Continent)
    }

    pub fn is_favorite(&self) -> bool {
        self.column(Column::Favorite)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("yes"))
    }

    /// Normalised user tags, in source order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The record's position as `(lat, lon)`, if it has a parsable one.
    pub fn coordinates(&self) -> Option<Coord<f64>> {
        parse_coordinate(self.location.as_deref()?)
    }

    /// All populated fields: known columns in header order, then the rest.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        let known = Column::ALL
            .into_iter()
            .filter_map(|col| self.column(col).map(|v| (col.header(), v)));
        let extra = self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        known.chain(extra)
    }
}
