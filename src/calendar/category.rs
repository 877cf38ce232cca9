pub const DEFAULT_CATEGORY: &str = "PERFORMANCE";
pub const RELEASE_DAY: &str = "RELEASE DAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultDuration {
    Minutes(u32),
    AllDay,
}

/// Known categories with the host preset color each one is registered with.
pub static CATEGORY_DEFINITIONS: [CategoryDefinition; 12] = [
    CategoryDefinition { name: "PERFORMANCE", color: "Preset0" },
    CategoryDefinition { name: "STUDIO", color: "Preset7" },
    CategoryDefinition { name: "COLLAB", color: "Preset8" },
    CategoryDefinition { name: "VIDEO SHOOT", color: "Preset5" },
    CategoryDefinition { name: "PHOTOSHOOT", color: "Preset9" },
    CategoryDefinition { name: "PRESS", color: "Preset3" },
    CategoryDefinition { name: "MARKETING", color: "Preset4" },
    CategoryDefinition { name: "ADMIN", color: "Preset12" },
    CategoryDefinition { name: "REHEARSAL", color: "Preset1" },
    CategoryDefinition { name: "TRAVEL", color: "Preset2" },
    CategoryDefinition { name: RELEASE_DAY, color: "Preset10" },
    CategoryDefinition { name: "REST", color: "Preset14" },
];

pub fn default_duration(category: &str) -> Option<DefaultDuration> {
    let duration = match category {
        "PERFORMANCE" => DefaultDuration::Minutes(3 * 60),
        "STUDIO" => DefaultDuration::Minutes(4 * 60),
        "COLLAB" => DefaultDuration::Minutes(3 * 60),
        "VIDEO SHOOT" => DefaultDuration::Minutes(6 * 60),
        "PHOTOSHOOT" => DefaultDuration::Minutes(2 * 60),
        "PRESS" => DefaultDuration::Minutes(2 * 60),
        "MARKETING" => DefaultDuration::Minutes(2 * 60),
        "ADMIN" => DefaultDuration::Minutes(6 * 60),
        "REHEARSAL" => DefaultDuration::Minutes(2 * 60),
        "TRAVEL" => DefaultDuration::Minutes(8 * 60),
        RELEASE_DAY => DefaultDuration::AllDay,
        "REST" => DefaultDuration::Minutes(8 * 60),
        _ => return None,
    };
    Some(duration)
}

pub fn find_category(name: &str) -> Option<&'static CategoryDefinition> {
    CATEGORY_DEFINITIONS.iter().find(|c| c.name == name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCategory {
    pub name: &'static str,
    pub warning: Option<String>,
}

/// Maps free text onto one of the known categories.
///
/// Anything that does not match a known name falls back to PERFORMANCE and
/// carries a warning quoting the original input.
pub fn normalize_category(input: &str) -> NormalizedCategory {
    let upper = input.trim().to_uppercase();

    if let Some(def) = find_category(&upper) {
        return NormalizedCategory { name: def.name, warning: None };
    }

    let lower = upper.to_lowercase();
    if let Some(def) = CATEGORY_DEFINITIONS
        .iter()
        .find(|c| c.name.to_lowercase() == lower)
    {
        return NormalizedCategory { name: def.name, warning: None };
    }

    tracing::warn!("Unrecognized category {:?}, falling back to {}", input, DEFAULT_CATEGORY);
    NormalizedCategory {
        name: DEFAULT_CATEGORY,
        warning: Some(format!(
            "Unrecognized category '{}'. Auto-corrected to {}.",
            input, DEFAULT_CATEGORY
        )),
    }
}
