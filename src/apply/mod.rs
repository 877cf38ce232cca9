pub mod confirm;
pub mod master;
pub mod pipeline;
pub mod schedule;
pub mod session;

pub use confirm::{Confirm, PromptConfirm};
pub use master::ensure_master_categories;
pub use pipeline::{ApplyReport, apply_form};
pub use schedule::{AttendeeOutcome, ScheduleOutcome, apply_attendees, apply_category_and_duration};
pub use session::SessionState;
