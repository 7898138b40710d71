//! Synthetic image libraries for demos and load testing.
//!
//! Rows mimic what the search expects from real exports: a mix of decimal
//! and degree-marked coordinates, CSV-quoted tag lists, and sparse
//! optional columns.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::record::Column;

const BOM: &[u8] = "\u{feff}".as_bytes();

const EXTENSIONS: [&str; 9] = ["jpg", "jpeg", "png", "tiff", "tif", "raw", "cr2", "nef", "arw"];

/// Name, latitude, longitude, continent.
const LOCATIONS: [(&str, f64, f64, &str); 15] = [
    ("New York", 40.7128, -74.0060, "North America"),
    ("London", 51.5074, -0.1278, "Europe"),
    ("Tokyo", 35.6762, 139.6503, "Asia"),
    ("Sydney", -33.8688, 151.2093, "Australia"),
    ("Paris", 48.8566, 2.3522, "Europe"),
    ("Los Angeles", 34.0522, -118.2437, "North America"),
    ("Berlin", 52.5200, 13.4050, "Europe"),
    ("Mumbai", 19.0760, 72.8777, "Asia"),
    ("Cairo", 30.0444, 31.2357, "Africa"),
    ("Rio de Janeiro", -22.9068, -43.1729, "South America"),
    ("Vancouver", 49.2827, -123.1207, "North America"),
    ("Barcelona", 41.3851, 2.1734, "Europe"),
    ("Singapore", 1.3521, 103.8198, "Asia"),
    ("Cape Town", -33.9249, 18.4241, "Africa"),
    ("Buenos Aires", -34.6118, -58.3960, "South America"),
];

const USER_TAGS: [&str; 34] = [
    "Landscape", "Portrait", "Street", "Nature", "Urban", "Sunset", "Sunrise", "Beach",
    "Mountain", "Forest", "City", "Architecture", "Food", "Travel", "Family", "Wedding",
    "Event", "Macro", "Wildlife", "Sports", "Concert", "Festival", "Holiday", "Vacation",
    "Work", "Art", "Abstract", "Black and White", "Vintage", "HDR", "Panorama", "Night",
    "Golden Hour", "Blue Hour",
];

const HOCKEY_TEAMS: [&str; 10] = [
    "Flames", "Oilers", "Canucks", "Leafs", "Canadiens", "Senators", "Jets", "Rangers", "Bruins",
    "Blackhawks",
];

const RESOLUTIONS: [(u32, u32); 8] = [
    (1920, 1080),
    (3840, 2160),
    (4000, 3000),
    (6000, 4000),
    (5472, 3648),
    (4032, 3024),
    (3264, 2448),
    (2048, 1536),
];

/// One generated CSV row, in `Column::ALL` order.
pub type GeneratedRow = [String; Column::ALL.len()];

/// Generate `count` rows whose filenames are numbered from `start_index + 1`.
pub fn generate_rows<R: Rng>(
    rng: &mut R,
    count: usize,
    start_index: usize,
) -> Vec<GeneratedRow> {
    (0..count)
        .map(|i| generate_row(rng, start_index + i + 1))
        .collect()
}

fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    // Every pool above is a non-empty constant.
    &items[rng.gen_range(0..items.len())]
}

fn generate_row<R: Rng>(rng: &mut R, number: usize) -> GeneratedRow {
    let ext = *pick(rng, &EXTENSIONS);
    let &(place, lat, lon, continent) = pick(rng, &LOCATIONS);
    let filename = format!("{}_{:06}.{}", place.replace(' ', "_"), number, ext);

    let (size, dpi, bit_color) = match ext {
        "raw" | "cr2" | "nef" | "arw" => (
            rng.gen_range(15.0..45.0),
            *pick(rng, &[300, 600, 1200]),
            *pick(rng, &[14, 16]),
        ),
        "tiff" | "tif" => (
            rng.gen_range(8.0..35.0),
            *pick(rng, &[300, 600, 1200]),
            *pick(rng, &[24, 32, 48]),
        ),
        _ => (
            rng.gen_range(1.5..25.0),
            *pick(rng, &[72, 96, 150, 300]),
            *pick(rng, &[24, 32]),
        ),
    };
    let size: f64 = (size * 100.0_f64).round() / 100.0;
    let (width, height) = *pick(rng, &RESOLUTIONS);

    let coord_lat = lat + rng.gen_range(-0.5..0.5);
    let coord_lon = lon + rng.gen_range(-0.5..0.5);
    let coordinate = if rng.gen_bool(0.5) {
        format!("{:.5}, {:.5}", coord_lat, coord_lon)
    } else {
        let lat_dir = if coord_lat >= 0.0 { 'N' } else { 'S' };
        let lon_dir = if coord_lon >= 0.0 { 'E' } else { 'W' };
        format!(
            "{:.0}° {:02}' {}, {:.0}° {:02}' {}",
            coord_lat.abs(),
            rng.gen_range(0..60),
            lat_dir,
            coord_lon.abs(),
            rng.gen_range(0..60),
            lon_dir
        )
    };

    let tag_count = rng.gen_range(1..=5);
    let tags: Vec<&str> = USER_TAGS
        .choose_multiple(rng, tag_count)
        .copied()
        .collect();
    let user_tags = format!("\"\"\"{}\"\"\"", tags.join(", "));

    let team = *pick(rng, &HOCKEY_TEAMS);
    let optional = |rng: &mut R, keep: f64, value: String| {
        if rng.gen_bool(keep) { value } else { String::new() }
    };

    [
        filename,
        ext.to_string(),
        size.to_string(),
        width.to_string(),
        height.to_string(),
        dpi.to_string(),
        optional(rng, 0.9, coordinate),
        optional(rng, 0.15, "Yes".to_string()),
        optional(rng, 0.95, continent.to_string()),
        optional(rng, 0.8, bit_color.to_string()),
        optional(rng, 0.3, "Y".to_string()),
        optional(rng, 0.1, team.to_string()),
        optional(rng, 0.9, user_tags),
    ]
}

/// Number of data rows already in `path`, or 0 if it does not exist.
pub fn existing_row_count(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Generator: Failed to read {:?}", path))?;
    Ok(content.lines().count().saturating_sub(1))
}

/// Write rows to `path`. A new file gets a BOM and header row; with
/// `append` the rows are added to the end of an existing file.
pub fn write_csv(path: &Path, rows: &[GeneratedRow], append: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("Generator: Failed to open {:?}", path))?;

    if !append {
        file.write_all(BOM)?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if !append {
        writer.write_record(Column::ALL.iter().map(|col| col.header()))?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Generator: Failed to write {:?}", path))?;
    Ok(())
}
