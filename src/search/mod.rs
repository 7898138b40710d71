//! Linear search over loaded records.

use rayon::prelude::*;

use crate::geofence::point_in_polygon;
use crate::query::Query;
use crate::record::ImageRecord;

/// Check a record against every condition of the query.
pub fn matches(record: &ImageRecord, query: &Query) -> bool {
    if !query.conditions.iter().all(|c| record.matches_condition(c)) {
        return false;
    }

    if !query.tags.iter().all(|t| record.has_tag(t)) {
        return false;
    }

    match &query.polygon {
        None => true,
        Some(polygon) => record
            .coordinates()
            .is_some_and(|point| point_in_polygon(point, polygon)),
    }
}

/// Records matching `query`, in input order.
pub fn search<'a>(records: &'a [ImageRecord], query: &Query) -> Vec<&'a ImageRecord> {
    records.iter().filter(|r| matches(r, query)).collect()
}

/// Same as [`search`], evaluated on the rayon pool.
pub fn par_search<'a>(records: &'a [ImageRecord], query: &Query) -> Vec<&'a ImageRecord> {
    records.par_iter().filter(|r| matches(r, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldNames;
    use crate::query::{CompareOp, FieldCondition, parse_polygon};

    fn record(pairs: &[(&str, &str)]) -> ImageRecord {
        ImageRecord::from_row(pairs.iter().copied(), &FieldNames::default()).unwrap()
    }

    fn library() -> Vec<ImageRecord> {
        vec![
            record(&[
                ("Filename", "Calgary_000001.jpg"),
                ("Type", "jpg"),
                ("DPI", "300"),
                ("(Center) Coordinate", "51.05011, -114.08529"),
                ("User Tags", r#""""Landscape, Sunset""""#),
            ]),
            record(&[
                ("Filename", "Edmonton_000002.png"),
                ("Type", "PNG"),
                ("DPI", "72"),
                ("(Center) Coordinate", "53.55014, -113.46871"),
                ("User Tags", "Urban"),
            ]),
            record(&[
                ("Filename", "Tokyo_000003.jpg"),
                ("Type", "JPG"),
                ("DPI", "150"),
                ("(Center) Coordinate", "36° 00' N, 138° 00' E"),
                ("User Tags", "landscape, Night"),
            ]),
            record(&[
                ("Filename", "Nowhere_000004.jpg"),
                ("Type", "jpg"),
                ("User Tags", "Landscape"),
            ]),
        ]
    }

    fn filenames(found: &[&ImageRecord]) -> Vec<String> {
        found
            .iter()
            .map(|r| r.filename().unwrap_or_default().to_string())
            .collect()
    }

    fn calgary() -> Query {
        Query::new().with_polygon(
            parse_polygon("52,-115 52,-113 50,-113 50,-115")
                .unwrap()
                .unwrap(),
        )
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let records = library();
        let found = search(&records, &Query::new());
        assert_eq!(found.len(), records.len());
        assert!(found.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn field_condition() {
        let records = library();
        let query = Query::new().with_condition(FieldCondition::new("Type", CompareOp::Equals, "jpg"));
        assert_eq!(
            filenames(&search(&records, &query)),
            ["Calgary_000001.jpg", "Tokyo_000003.jpg", "Nowhere_000004.jpg"]
        );
    }

    #[test]
    fn absent_field_excludes_record() {
        let records = library();
        let query =
            Query::new().with_condition(FieldCondition::new("DPI", CompareOp::LessOrEqual, "1000"));
        assert_eq!(search(&records, &query).len(), 3);
    }

    #[test]
    fn tag_condition() {
        let records = library();
        let query = Query::new().with_tag("LANDSCAPE");
        assert_eq!(
            filenames(&search(&records, &query)),
            ["Calgary_000001.jpg", "Tokyo_000003.jpg", "Nowhere_000004.jpg"]
        );
    }

    #[test]
    fn polygon_constraint() {
        let records = library();
        assert_eq!(
            filenames(&search(&records, &calgary())),
            ["Calgary_000001.jpg"]
        );
    }

    #[test]
    fn degree_marked_coordinates_are_geofenced() {
        let records = library();
        let japan = Query::new().with_polygon(
            parse_polygon("30,130 40,130 40,145 30,145").unwrap().unwrap(),
        );
        assert_eq!(filenames(&search(&records, &japan)), ["Tokyo_000003.jpg"]);
    }

    #[test]
    fn record_without_coordinate_never_matches_polygon() {
        let records = library();
        let everywhere = Query::new()
            .with_tag("landscape")
            .with_polygon(
                parse_polygon("-90,-180 90,-180 90,180 -90,180").unwrap().unwrap(),
            );
        let found = filenames(&search(&records, &everywhere));
        assert!(!found.contains(&"Nowhere_000004.jpg".to_string()));
        assert_eq!(found, ["Calgary_000001.jpg", "Tokyo_000003.jpg"]);
    }

    #[test]
    fn conjunction_matches_iff_every_part_matches() {
        let records = library();
        let parts = [
            Query::new().with_condition(FieldCondition::new("Type", CompareOp::Equals, "jpg")),
            Query::new().with_condition(FieldCondition::new("DPI", CompareOp::GreaterThan, "100")),
            Query::new().with_tag("landscape"),
            calgary(),
        ];
        let combined = calgary()
            .with_condition(FieldCondition::new("Type", CompareOp::Equals, "jpg"))
            .with_condition(FieldCondition::new("DPI", CompareOp::GreaterThan, "100"))
            .with_tag("landscape");

        for rec in &records {
            let expected = parts.iter().all(|q| matches(rec, q));
            assert_eq!(matches(rec, &combined), expected, "{:?}", rec.filename());
        }
        assert_eq!(
            filenames(&search(&records, &combined)),
            ["Calgary_000001.jpg"]
        );
    }

    #[test]
    fn parallel_search_preserves_order() {
        let records: Vec<ImageRecord> = (0..500)
            .map(|i| {
                let dpi = (i % 7).to_string();
                let name = format!("img_{i:04}.jpg");
                record(&[("Filename", name.as_str()), ("DPI", dpi.as_str())])
            })
            .collect();
        let query = Query::new().with_condition(FieldCondition::new("DPI", CompareOp::GreaterOrEqual, "3"));

        let sequential = search(&records, &query);
        let parallel = par_search(&records, &query);
        assert_eq!(sequential, parallel);
        assert!(!sequential.is_empty());
    }
}
