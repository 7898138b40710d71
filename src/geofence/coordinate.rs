//! Coordinate strings as entered in the image library.
//!
//! Formats:
//!   51.05011, -114.08529          - decimal degrees
//!   36° 00' N, 138° 00' E         - degree-marked (minutes/seconds ignored)

use geo_types::Coord;

const DEGREE: char = '°';

/// Parse a raw coordinate string into `(lat, lon)`.
///
/// Returns `None` for empty or malformed input. No range validation is
/// performed on either component.
pub fn parse_coordinate(raw: &str) -> Option<Coord<f64>> {
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split(',');
    let lat_part = parts.next()?;
    let lon_part = parts.next()?;

    if raw.contains(DEGREE) {
        Some(Coord {
            x: parse_degree_component(lat_part)?,
            y: parse_degree_component(lon_part)?,
        })
    } else {
        Some(Coord {
            x: lat_part.trim().parse().ok()?,
            y: lon_part.trim().parse().ok()?,
        })
    }
}

/// Parse one degree-marked component such as `36° 00' S`.
///
/// Only the number before the degree sign contributes to the value.
fn parse_degree_component(part: &str) -> Option<f64> {
    let part = part.trim();

    let (sign, stripped) = if part.contains(['N', 'S']) {
        let sign = if part.contains('N') { 1.0 } else { -1.0 };
        (sign, part.replace(['N', 'S'], ""))
    } else if part.contains(['E', 'W']) {
        let sign = if part.contains('E') { 1.0 } else { -1.0 };
        (sign, part.replace(['E', 'W'], ""))
    } else {
        (1.0, part.to_string())
    };

    let (degrees, _) = stripped.split_once(DEGREE).unwrap_or((stripped.as_str(), ""));
    let degrees: f64 = degrees.trim().parse().ok()?;
    Some(degrees * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn parses_decimal_pair() {
        assert_eq!(
            parse_coordinate("51.05011, -114.08529"),
            Some(coord(51.05011, -114.08529))
        );
    }

    #[test]
    fn empty_input_has_no_coordinate() {
        assert_eq!(parse_coordinate(""), None);
    }

    #[test]
    fn parses_degree_marked_north_east() {
        assert_eq!(
            parse_coordinate("36° 00' N, 138° 00' E"),
            Some(coord(36.0, 138.0))
        );
    }

    #[test]
    fn parses_degree_marked_south_west() {
        assert_eq!(
            parse_coordinate("36° 00' S, 138° 00' W"),
            Some(coord(-36.0, -138.0))
        );
    }

    #[test]
    fn ignores_minutes_in_degree_marked() {
        assert_eq!(
            parse_coordinate("49° 59' N, 123° 45' W"),
            Some(coord(49.0, -123.0))
        );
    }

    #[test]
    fn degree_marked_without_hemisphere_is_positive() {
        assert_eq!(parse_coordinate("12°, 34°"), Some(coord(12.0, 34.0)));
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        assert_eq!(parse_coordinate("200, 400"), Some(coord(200.0, 400.0)));
    }

    #[test]
    fn extra_components_are_ignored() {
        assert_eq!(parse_coordinate("1.5, 2.5, 3.5"), Some(coord(1.5, 2.5)));
    }

    #[test]
    fn malformed_input_has_no_coordinate() {
        assert_eq!(parse_coordinate("51.05011"), None);
        assert_eq!(parse_coordinate("north, south"), None);
        assert_eq!(parse_coordinate("abc° N, 138° E"), None);
        assert_eq!(parse_coordinate("36° N"), None);
    }
}
