use crate::color::EventColors;
use crate::models::{DisplayMode, NormalizedEvent, Session};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tracing::warn;

// Matches the calendar engine's default timed-event duration.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

pub fn normalize_session(session: &Session) -> NormalizedEvent {
    let colors = EventColors::for_title(&session.title);

    NormalizedEvent {
        title: session.title.clone(),
        start: session.start,
        end: session.end,
        location: session.location.clone(),
        contact_person: session.contact_person.clone(),
        description: session.description.clone(),
        assignment_count: session.assignment_count,
        min_participants: session.min_participants,
        max_participants: session.max_participants,
        overbook: session.overbook,
        text_color: colors.text,
        background_color: colors.background,
        border_color: colors.border,
        display: DisplayMode::Block,
    }
}

// One broken record must not blank the whole calendar.
pub fn parse_sessions(records: Vec<Value>) -> Vec<Session> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!("skipping malformed session at index {index}: {err}");
                None
            }
        })
        .collect()
}

impl NormalizedEvent {
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end.unwrap_or_else(|| {
            self.start
                .checked_add_signed(Duration::minutes(DEFAULT_DURATION_MINUTES))
                .unwrap_or(self.start)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{generate_color, TEXT_COLOR};
    use serde_json::json;

    fn raw_session() -> Value {
        json!({
            "title": "Yoga",
            "start": "2024-01-01T09:00:00Z",
            "end_": "2024-01-01T10:00:00Z",
            "location": { "name": "Hall A" },
            "contact_person": { "name": "Ana", "email": "ana@example.com" },
            "description": "Bring a mat",
            "assignment_count": 4,
            "min_participants": 2,
            "max_participants": 12,
            "overbook": false
        })
    }

    #[test]
    fn resolves_end_and_colors() {
        let session: Session = serde_json::from_value(raw_session()).unwrap();
        let event = normalize_session(&session);

        assert_eq!(
            event.end.unwrap().to_rfc3339(),
            "2024-01-01T10:00:00+00:00"
        );
        assert_eq!(event.border_color, generate_color("Yoga"));
        assert_eq!(event.background_color, generate_color("Yoga").with_alpha(0.2));
        assert_eq!(event.text_color.as_str(), TEXT_COLOR);
        assert_eq!(event.display, DisplayMode::Block);
    }

    #[test]
    fn serialized_event_uses_display_field_names() {
        let session: Session = serde_json::from_value(raw_session()).unwrap();
        let value = serde_json::to_value(normalize_session(&session)).unwrap();

        assert!(value.get("end").is_some());
        assert!(value.get("end_").is_none());
        assert_eq!(value["display"], "block");
        assert!(value["backgroundColor"].as_str().unwrap().ends_with("33"));
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let session: Session = serde_json::from_value(raw_session()).unwrap();
        let once = normalize_session(&session);

        let reparsed: Session = serde_json::from_value(serde_json::to_value(&once).unwrap()).unwrap();
        let twice = normalize_session(&reparsed);

        assert_eq!(once, twice);
    }

    #[test]
    fn source_record_is_left_untouched() {
        let session: Session = serde_json::from_value(raw_session()).unwrap();
        let copy = session.clone();
        let _ = normalize_session(&session);
        let _ = normalize_session(&session);
        assert_eq!(session, copy);
    }

    #[test]
    fn missing_title_falls_back_to_default_color() {
        let session: Session = serde_json::from_value(json!({
            "start": "2024-01-01T09:00:00Z"
        }))
        .unwrap();
        let event = normalize_session(&session);

        assert_eq!(event.title, "");
        assert_eq!(event.border_color, generate_color(""));
        assert_eq!(event.effective_end().to_rfc3339(), "2024-01-01T10:00:00+00:00");
    }

    #[test]
    fn malformed_records_are_dropped() {
        let sessions = parse_sessions(vec![
            raw_session(),
            json!({ "title": "No start" }),
            json!("not an object"),
        ]);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title, "Yoga");
    }

    #[test]
    fn null_title_degrades_to_default_color() {
        let sessions = parse_sessions(vec![json!({
            "title": null,
            "start": "2024-01-01T09:00:00Z",
            "end_": "2024-01-01T10:00:00Z"
        })]);
        assert_eq!(sessions.len(), 1);

        let event = normalize_session(&sessions[0]);
        assert_eq!(event.title, "");
        assert_eq!(event.border_color, generate_color(""));
    }

    #[test]
    fn null_counts_and_names_use_defaults() {
        let sessions = parse_sessions(vec![json!({
            "title": "Yoga",
            "start": "2024-01-01T09:00:00Z",
            "assignment_count": null,
            "overbook": null,
            "min_participants": null,
            "location": { "name": null },
            "contact_person": { "name": null, "email": null }
        })]);
        assert_eq!(sessions.len(), 1);

        let session = &sessions[0];
        assert_eq!(session.assignment_count, 0);
        assert!(!session.overbook);
        assert_eq!(session.min_participants, None);
        assert_eq!(session.location.as_ref().map(|l| l.name.as_str()), Some(""));
        let contact = session.contact_person.as_ref().unwrap();
        assert_eq!((contact.name.as_str(), contact.email.as_str()), ("", ""));
    }

    #[test]
    fn raw_end_wins_when_both_keys_present() {
        let sessions = parse_sessions(vec![json!({
            "title": "Yoga",
            "start": "2024-01-01T09:00:00Z",
            "end_": "2024-01-01T10:00:00Z",
            "end": "2024-01-01T11:00:00Z"
        })]);
        assert_eq!(sessions.len(), 1);
        assert_eq!(
            sessions[0].end.unwrap().to_rfc3339(),
            "2024-01-01T10:00:00+00:00"
        );

        let once = normalize_session(&sessions[0]);
        let mut resolved = serde_json::to_value(&once).unwrap();
        resolved["end_"] = json!("2024-01-01T10:00:00Z");
        let twice = normalize_session(&serde_json::from_value(resolved).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn open_ended_session_near_max_date_does_not_overflow() {
        let sessions = parse_sessions(vec![json!({
            "title": "Far future",
            "start": "+262142-12-31T23:30:00Z"
        })]);
        assert_eq!(sessions.len(), 1);

        let event = normalize_session(&sessions[0]);
        assert_eq!(event.effective_end(), event.start);
    }
}
