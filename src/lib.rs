pub mod apply;
pub mod calendar;
pub mod form;
pub mod host;
pub mod storage;

pub use apply::{ApplyReport, SessionState, apply_form, ensure_master_categories};
pub use calendar::{CalendarItem, normalize_category, parse_attendees};
pub use form::{EventFormInput, ValidationError, evaluate_warnings, normalize_artists};
pub use host::{CalendarHost, HostError, InMemoryItem, MasterCategoryRegistry};
