use std::sync::OnceLock;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistRosterEntry {
    pub name: &'static str,
    pub email: &'static str,
}

/// Known participants that get invited automatically. An empty email marks a
/// roster member who is never invited.
pub const ARTIST_ROSTER: &[ArtistRosterEntry] = &[
    ArtistRosterEntry { name: "704 Prod", email: "prod@thelegacycrew.com" },
    ArtistRosterEntry { name: "Legacy Crew", email: "crew@thelegacycrew.com" },
    ArtistRosterEntry { name: "Legacy Management", email: "management@thelegacycrew.com" },
    ArtistRosterEntry { name: "House Band", email: "" },
];

pub fn find_artist(name: &str) -> Option<&'static ArtistRosterEntry> {
    let wanted = name.trim().to_lowercase();
    ARTIST_ROSTER.iter().find(|entry| entry.name.to_lowercase() == wanted)
}

pub fn is_valid_email(candidate: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
    });
    regex.is_match(candidate)
}

/// Collects invitee addresses from roster matches and hand-typed emails.
///
/// Unknown names and malformed addresses are dropped without an error.
/// Duplicates are removed by exact match; the first occurrence wins.
pub fn parse_attendees(participants_raw: &str, manual_raw: &str) -> Vec<String> {
    let mut emails: Vec<String> = Vec::new();
    let mut push = |email: &str| {
        if !emails.iter().any(|e| e == email) {
            emails.push(email.to_string());
        }
    };

    for name in participants_raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match find_artist(name) {
            Some(entry) if !entry.email.is_empty() => push(entry.email),
            Some(_) => tracing::debug!("Roster entry {:?} has no email", name),
            None => tracing::debug!("No roster entry for {:?}", name),
        }
    }

    for token in manual_raw
        .split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        if is_valid_email(token) {
            push(token);
        } else {
            tracing::debug!("Dropping malformed attendee {:?}", token);
        }
    }

    emails
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn roster_lookup_ignores_case() {
        let entry = find_artist("704 PROD").unwrap();
        assert_eq!(entry.email, "prod@thelegacycrew.com");
    }

    #[test]
    fn email_shape_requires_dot_in_domain() {
        assert!(is_valid_email("valid@x.com"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("someone@localhost"));
        assert!(!is_valid_email("two words@x.com"));
    }

    #[test]
    fn unmatched_names_and_malformed_emails_are_dropped() {
        let attendees = parse_attendees("704 Prod, Unknown Person", "bad-email, valid@x.com");

        assert_eq!(attendees, vec!["prod@thelegacycrew.com", "valid@x.com"]);
    }

    #[test]
    fn manual_attendees_accept_semicolons() {
        let attendees = parse_attendees("", "a@x.com; b@y.org ;; ,c@z.net");

        assert_eq!(attendees, vec!["a@x.com", "b@y.org", "c@z.net"]);
    }

    #[test]
    fn duplicates_collapse_to_one_address() {
        let attendees = parse_attendees("704 prod, 704 Prod", "prod@thelegacycrew.com");

        assert_eq!(attendees, vec!["prod@thelegacycrew.com"]);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let attendees = parse_attendees("", "A@x.com, a@x.com");

        assert_eq!(attendees.len(), 2);
    }

    #[test]
    fn roster_member_without_email_is_not_invited() {
        assert!(parse_attendees("House Band", "").is_empty());
    }
}
