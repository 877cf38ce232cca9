use std::sync::OnceLock;
use regex::Regex;

pub const EMOJI_WARNING: &str =
    "Short Description contains emojis. Standard advises against emojis.";
pub const HASHTAG_WARNING: &str =
    "Short Description contains hashtags. Standard advises against hashtags.";
pub const LOCATION_FIRST_WARNING: &str =
    "Short Description appears to start with the location. Standard advises not to put location first.";

fn contains_emoji(text: &str) -> bool {
    static EMOJI_RE: OnceLock<Regex> = OnceLock::new();
    let regex = EMOJI_RE.get_or_init(|| {
        Regex::new(r"[\x{1F300}-\x{1FAFF}]").expect("invalid emoji regex")
    });
    regex.is_match(text)
}

/// Style checks on the short description, always reported in the order
/// emoji, hashtag, location-first.
pub fn evaluate_warnings(description: &str, location: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    if contains_emoji(description) {
        warnings.push(EMOJI_WARNING.to_string());
    }

    if description.contains('#') {
        warnings.push(HASHTAG_WARNING.to_string());
    }

    if !location.is_empty()
        && description.to_lowercase().starts_with(&location.to_lowercase())
    {
        warnings.push(LOCATION_FIRST_WARNING.to_string());
    }

    warnings
}
