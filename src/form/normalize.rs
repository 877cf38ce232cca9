pub const SUBJECT_SEPARATOR: &str = " — ";
pub const ARTIST_SEPARATOR: &str = " x ";

/// Joins comma separated participants with " x ".
///
/// Falls back to the raw input when no name survives trimming.
pub fn normalize_artists(raw: &str) -> String {
    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return raw.to_string();
    }

    parts.join(ARTIST_SEPARATOR)
}

pub fn build_subject(category: &str, artists: &str, description: &str, location: &str) -> String {
    [category, artists, description, location].join(SUBJECT_SEPARATOR)
}
