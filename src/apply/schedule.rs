use std::fmt;

use chrono::Duration;

use crate::apply::{confirm::Confirm, session::SessionState};
use crate::calendar::{DefaultDuration, default_duration, parse_attendees, span_minutes};
use crate::host::{CalendarHost, HostError};

/// How far the category/duration step got, worded for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    AllDayApplied,
    AllDayUnsupported,
    AllDayFailed,
    NoDefaultDuration { category: String },
    StartUnavailable,
    EndUnavailable,
    TimePreserved,
    DurationFailed,
    DurationApplied { category: String, minutes: u32 },
}

impl fmt::Display for ScheduleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleOutcome::AllDayApplied => {
                write!(f, "Subject, location, category, and all-day RELEASE DAY applied.")
            }
            ScheduleOutcome::AllDayUnsupported => write!(
                f,
                "Subject, location, and category applied. (All-day flag not supported on this client.)"
            ),
            ScheduleOutcome::AllDayFailed => {
                write!(f, "Subject, location, and category applied. Failed to set all-day flag.")
            }
            ScheduleOutcome::NoDefaultDuration { category } => write!(
                f,
                "Subject, location, and category applied. (No default duration configured for {}.)",
                category
            ),
            ScheduleOutcome::StartUnavailable => {
                write!(f, "Subject, location, and category applied. (Failed to get start time.)")
            }
            ScheduleOutcome::EndUnavailable => {
                write!(f, "Subject, location, and category applied. (Failed to get end time.)")
            }
            ScheduleOutcome::TimePreserved => {
                write!(f, "Subject, location, and category applied. Existing time preserved.")
            }
            ScheduleOutcome::DurationFailed => {
                write!(f, "Subject, location, and category applied. Failed to set default duration.")
            }
            ScheduleOutcome::DurationApplied { category, minutes } => write!(
                f,
                "Subject, location, category, and default {} duration applied ({} minutes).",
                category, minutes
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendeeOutcome {
    Skipped,
    Added(Vec<String>),
    Failed(String),
}

pub fn duration_prompt(category: &str, minutes: u32) -> String {
    format!(
        "Detected custom or previous duration.\nApply default {} duration of {} minutes?",
        category, minutes
    )
}

/// Invites roster matches and manually typed addresses. Nothing is sent to
/// the host when no address resolves.
pub async fn apply_attendees<H>(host: &mut H, participants: &str, manual: &str) -> AttendeeOutcome
where
    H: CalendarHost + ?Sized,
{
    let attendees = parse_attendees(participants, manual);
    if attendees.is_empty() {
        tracing::debug!("No attendees resolved, skipping invitation");
        return AttendeeOutcome::Skipped;
    }

    match host.add_attendees(&attendees).await {
        Ok(()) => {
            tracing::info!("Added {} attendees", attendees.len());
            AttendeeOutcome::Added(attendees)
        }
        Err(e) => {
            tracing::warn!("Failed to add attendees: {}", e);
            AttendeeOutcome::Failed(e.to_string())
        }
    }
}

/// Labels the item with `category` and decides whether to write the
/// category's default duration.
///
/// The label is best-effort. Timing is only overwritten without asking when
/// nothing has been applied yet or the item still carries exactly what was
/// applied last; any divergence goes through `confirmer`.
pub async fn apply_category_and_duration<H, C>(
    host: &mut H,
    category: &str,
    session: &mut SessionState,
    confirmer: &mut C,
) -> ScheduleOutcome
where
    H: CalendarHost + ?Sized,
    C: Confirm + ?Sized,
{
    match host.add_categories(&[category.to_string()]).await {
        Ok(()) => tracing::info!("Category {} added", category),
        Err(HostError::Unsupported(_)) => tracing::debug!("Client cannot label categories"),
        Err(e) => tracing::warn!("Failed to add category {}: {}", category, e),
    }

    let minutes = match default_duration(category) {
        Some(DefaultDuration::AllDay) => return apply_all_day(host, category, session).await,
        Some(DefaultDuration::Minutes(minutes)) => minutes,
        None => {
            tracing::info!("No default duration configured for {}", category);
            return ScheduleOutcome::NoDefaultDuration { category: category.to_string() };
        }
    };

    let start = match host.start().await {
        Ok(start) => start,
        Err(e) => {
            tracing::warn!("Failed to get start time: {}", e);
            return ScheduleOutcome::StartUnavailable;
        }
    };

    let end = match host.end().await {
        Ok(end) => end,
        Err(e) => {
            tracing::warn!("Failed to get end time: {}", e);
            return ScheduleOutcome::EndUnavailable;
        }
    };

    let current_minutes = span_minutes(start, end);

    let should_apply = session.is_unset() || session.matches(category, start, current_minutes) || {
        tracing::debug!(
            "Timing diverged from last apply ({:?}), current {} minutes",
            session,
            current_minutes
        );
        confirmer.confirm(&duration_prompt(category, minutes))
    };

    if !should_apply {
        tracing::info!("Keeping existing {} minute duration", current_minutes);
        session.record(category, start, current_minutes);
        return ScheduleOutcome::TimePreserved;
    }

    let new_end = start + Duration::minutes(i64::from(minutes));
    if let Err(e) = host.set_end(new_end).await {
        tracing::warn!("Failed to set default duration: {}", e);
        return ScheduleOutcome::DurationFailed;
    }

    tracing::info!("Applied default {} duration of {} minutes", category, minutes);
    session.record(category, start, i64::from(minutes));

    ScheduleOutcome::DurationApplied { category: category.to_string(), minutes }
}

async fn apply_all_day<H>(host: &mut H, category: &str, session: &mut SessionState) -> ScheduleOutcome
where
    H: CalendarHost + ?Sized,
{
    let outcome = match host.set_all_day(true).await {
        Ok(()) => {
            tracing::info!("Marked {} as all-day", category);
            ScheduleOutcome::AllDayApplied
        }
        Err(HostError::Unsupported(_)) => ScheduleOutcome::AllDayUnsupported,
        Err(e) => {
            tracing::warn!("Failed to set all-day flag: {}", e);
            ScheduleOutcome::AllDayFailed
        }
    };

    session.record_all_day(category);
    outcome
}
