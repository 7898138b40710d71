//! User tag lists as stored in the library CSV.

const QUOTE: char = '"';

/// Split a raw tag field into trimmed, non-empty tags.
///
/// Surrounding quote characters are stripped and doubled quotes collapse
/// to one before splitting on commas. Order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.trim_matches(QUOTE)
        .replace("\"\"", "\"")
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
