pub mod category;
pub mod item;
pub mod roster;

pub use category::{
    CategoryDefinition, DefaultDuration, NormalizedCategory, CATEGORY_DEFINITIONS,
    DEFAULT_CATEGORY, RELEASE_DAY, default_duration, normalize_category,
};
pub use item::{CalendarItem, span_minutes};
pub use roster::{ArtistRosterEntry, ARTIST_ROSTER, parse_attendees};
