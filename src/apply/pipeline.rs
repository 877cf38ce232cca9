use crate::apply::confirm::Confirm;
use crate::apply::schedule::{AttendeeOutcome, ScheduleOutcome, apply_attendees, apply_category_and_duration};
use crate::apply::session::SessionState;
use crate::calendar::normalize_category;
use crate::form::{EventFormInput, ValidationError, build_subject, evaluate_warnings, normalize_artists, validate};
use crate::host::CalendarHost;
use crate::storage::FormConfig;

/// Everything the form reports back after one apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub category: &'static str,
    pub subject: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub attendees: Option<AttendeeOutcome>,
    pub schedule: Option<ScheduleOutcome>,
}

impl ApplyReport {
    /// Final status line, present once the category step has run.
    pub fn status(&self) -> Option<String> {
        self.schedule.as_ref().map(ToString::to_string)
    }

    pub fn completed(&self) -> bool {
        self.schedule.is_some()
    }
}

/// Runs the whole form against the open item: validate, normalize, write
/// subject and location, invite attendees, then label and time the event.
///
/// Host calls are issued one after another. A failed subject write ends the
/// sequence; a failed location write ends it when the config says so.
pub async fn apply_form<H, C>(
    host: &mut H,
    input: &EventFormInput,
    session: &mut SessionState,
    confirmer: &mut C,
    options: &FormConfig,
) -> Result<ApplyReport, ValidationError>
where
    H: CalendarHost + ?Sized,
    C: Confirm + ?Sized,
{
    let form = validate(input)?;

    let category = normalize_category(&form.category);
    let artists = normalize_artists(&form.participants);

    let mut warnings: Vec<String> = category.warning.into_iter().collect();
    warnings.extend(evaluate_warnings(&form.description, &form.location));

    let subject = build_subject(category.name, &artists, &form.description, &form.location);

    let mut report = ApplyReport {
        category: category.name,
        subject,
        warnings,
        errors: vec![],
        attendees: None,
        schedule: None,
    };

    tracing::info!("Setting subject: {}", report.subject);
    if let Err(e) = host.set_subject(&report.subject).await {
        tracing::error!("Failed to set subject: {}", e);
        report.errors.push(format!("Failed to set subject: {}", e));
        return Ok(report);
    }

    tracing::info!("Setting location: {}", form.location);
    if let Err(e) = host.set_location(&form.location).await {
        tracing::error!("Failed to set location: {}", e);
        report.errors.push(format!("Failed to set location: {}", e));
        if options.stop_on_location_failure {
            return Ok(report);
        }
    }

    if options.invite_attendees {
        let outcome = apply_attendees(host, &form.participants, &form.attendees).await;
        if let AttendeeOutcome::Failed(message) = &outcome {
            report.errors.push(format!("Failed to add attendees: {}", message));
        }
        report.attendees = Some(outcome);
    }

    let schedule = apply_category_and_duration(host, category.name, session, confirmer).await;
    report.schedule = Some(schedule);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarItem;
    use crate::host::{HostOperation, InMemoryItem};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 20, 19, 30, 0).unwrap()
    }

    fn host() -> InMemoryItem {
        InMemoryItem::new(CalendarItem::new(start(), start() + Duration::minutes(30)))
    }

    fn input() -> EventFormInput {
        EventFormInput {
            category: "performance".to_string(),
            participants: "704 Prod, Guest".to_string(),
            description: "Headline set".to_string(),
            location: "Venue X".to_string(),
            attendees: "valid@x.com".to_string(),
        }
    }

    fn refuse(_: &str) -> bool {
        panic!("confirmation should not be requested")
    }

    #[tokio::test]
    async fn full_apply_writes_every_field() {
        let mut host = host();
        let mut session = SessionState::new();

        let report = apply_form(&mut host, &input(), &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap();

        assert_eq!(report.subject, "PERFORMANCE — 704 Prod x Guest — Headline set — Venue X");
        assert_eq!(host.item.subject, report.subject);
        assert_eq!(host.item.location, "Venue X");
        assert_eq!(host.item.categories, vec!["PERFORMANCE"]);
        assert_eq!(host.item.attendees, vec!["prod@thelegacycrew.com", "valid@x.com"]);
        assert_eq!(host.item.end, start() + Duration::minutes(180));
        assert_eq!(
            report.status().as_deref(),
            Some("Subject, location, category, and default PERFORMANCE duration applied (180 minutes).")
        );
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn host_calls_follow_fixed_order() {
        let mut host = host();
        let mut session = SessionState::new();

        apply_form(&mut host, &input(), &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap();

        assert_eq!(
            host.calls(),
            vec![
                HostOperation::SetSubject,
                HostOperation::SetLocation,
                HostOperation::AddAttendees,
                HostOperation::AddCategories,
                HostOperation::GetStart,
                HostOperation::GetEnd,
                HostOperation::SetEnd,
            ]
        );
    }

    #[tokio::test]
    async fn missing_fields_block_before_any_write() {
        let mut host = host();
        let mut session = SessionState::new();
        let incomplete = EventFormInput { description: " ".to_string(), ..input() };

        let err = apply_form(&mut host, &incomplete, &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Missing required fields: Short Description");
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_category_warning_comes_before_style_warnings() {
        let mut host = host();
        let mut session = SessionState::new();
        let form = EventFormInput {
            category: "gig".to_string(),
            description: "Venue X #live".to_string(),
            ..input()
        };

        let report = apply_form(&mut host, &form, &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap();

        assert_eq!(report.category, "PERFORMANCE");
        assert_eq!(
            report.warnings,
            vec![
                "Unrecognized category 'GIG'. Auto-corrected to PERFORMANCE.".to_string(),
                crate::form::warnings::HASHTAG_WARNING.to_string(),
                crate::form::warnings::LOCATION_FIRST_WARNING.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn subject_failure_stops_the_sequence() {
        let mut host = host().failing_on(HostOperation::SetSubject);
        let mut session = SessionState::new();

        let report = apply_form(&mut host, &input(), &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap();

        assert_eq!(report.errors, vec!["Failed to set subject: The subject could not be updated."]);
        assert_eq!(report.status(), None);
        assert_eq!(host.calls(), vec![HostOperation::SetSubject]);
    }

    #[tokio::test]
    async fn location_failure_stops_by_default() {
        let mut host = host().failing_on(HostOperation::SetLocation);
        let mut session = SessionState::new();

        let report = apply_form(&mut host, &input(), &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap();

        assert!(!report.completed());
        assert_eq!(report.errors, vec!["Failed to set location: The location could not be updated."]);
        assert!(host.item.categories.is_empty());
    }

    #[tokio::test]
    async fn location_failure_can_be_non_blocking() {
        let mut host = host().failing_on(HostOperation::SetLocation);
        let mut session = SessionState::new();
        let options = FormConfig { stop_on_location_failure: false, ..FormConfig::default() };

        let report = apply_form(&mut host, &input(), &mut session, &mut refuse, &options)
            .await
            .unwrap();

        assert!(report.completed());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(host.item.categories, vec!["PERFORMANCE"]);
    }

    #[tokio::test]
    async fn attendee_failure_does_not_block_category() {
        let mut host = host().failing_on(HostOperation::AddAttendees);
        let mut session = SessionState::new();

        let report = apply_form(&mut host, &input(), &mut session, &mut refuse, &FormConfig::default())
            .await
            .unwrap();

        assert!(report.completed());
        assert!(report.errors[0].starts_with("Failed to add attendees:"));
        assert_eq!(host.item.categories, vec!["PERFORMANCE"]);
    }

    #[tokio::test]
    async fn attendee_invitation_can_be_disabled() {
        let mut host = host();
        let mut session = SessionState::new();
        let options = FormConfig { invite_attendees: false, ..FormConfig::default() };

        let report = apply_form(&mut host, &input(), &mut session, &mut refuse, &options)
            .await
            .unwrap();

        assert_eq!(report.attendees, None);
        assert!(host.item.attendees.is_empty());
    }
}
