//! Draft events and their validation.
//!
//! A draft collects raw user input for a new event. Validation happens
//! entirely client-side, before any request is issued: all four fields must
//! be non-empty after trimming, and the calendar date is widened to a full
//! ISO-8601 timestamp (midnight UTC) because that is what the API stores.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{PlannerError, PlannerResult};

/// Raw user input for a new event, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    /// Calendar date as typed, `YYYY-MM-DD`
    pub date: String,
}

/// A validated event ready to be POSTed. Only obtainable through
/// [`EventDraft::validate`].
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
}

impl EventDraft {
    /// Validate the draft, producing the request body for event creation.
    ///
    /// Fails on the first empty field (after trimming) or an unparseable
    /// date. A failed validation means no HTTP request is made.
    pub fn validate(&self) -> PlannerResult<NewEvent> {
        let name = required("name", &self.name)?;
        let description = required("description", &self.description)?;
        let location = required("location", &self.location)?;
        let date_input = required("date", &self.date)?;

        let date = parse_event_date(&date_input)?;

        Ok(NewEvent {
            name,
            description,
            location,
            date,
        })
    }
}

fn required(field: &'static str, value: &str) -> PlannerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Widen a `YYYY-MM-DD` date to midnight UTC of that day.
fn parse_event_date(input: &str) -> PlannerResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(input.to_string()))?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> EventDraft {
        EventDraft {
            name: "Launch Party".to_string(),
            description: "Celebrating v1.0".to_string(),
            location: "HQ rooftop".to_string(),
            date: "2024-05-01".to_string(),
        }
    }

    // --- validate ---

    #[test]
    fn valid_draft_produces_new_event() {
        let new_event = make_draft().validate().unwrap();
        assert_eq!(new_event.name, "Launch Party");
        assert_eq!(new_event.location, "HQ rooftop");
    }

    #[test]
    fn fields_are_trimmed() {
        let mut draft = make_draft();
        draft.name = "  Launch Party  ".to_string();
        draft.location = "\tHQ rooftop\n".to_string();

        let new_event = draft.validate().unwrap();
        assert_eq!(new_event.name, "Launch Party");
        assert_eq!(new_event.location, "HQ rooftop");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut draft = make_draft();
        draft.name = String::new();
        assert!(matches!(
            draft.validate(),
            Err(PlannerError::MissingField("name"))
        ));
    }

    #[test]
    fn whitespace_only_field_is_rejected() {
        let mut draft = make_draft();
        draft.description = "   ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(PlannerError::MissingField("description"))
        ));
    }

    #[test]
    fn every_field_is_required() {
        for field in ["name", "description", "location", "date"] {
            let mut draft = make_draft();
            match field {
                "name" => draft.name = String::new(),
                "description" => draft.description = String::new(),
                "location" => draft.location = String::new(),
                "date" => draft.date = String::new(),
                _ => unreachable!(),
            }
            assert!(matches!(
                draft.validate(),
                Err(PlannerError::MissingField(f)) if f == field
            ));
        }
    }

    // --- date widening ---

    #[test]
    fn date_becomes_midnight_utc() {
        let new_event = make_draft().validate().unwrap();
        assert_eq!(new_event.date.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn date_serializes_as_iso_8601_timestamp() {
        let new_event = make_draft().validate().unwrap();
        let json = serde_json::to_value(&new_event).unwrap();

        let wire_date = json["date"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(wire_date).unwrap();
        assert_eq!(parsed.date_naive().to_string(), "2024-05-01");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut draft = make_draft();
        draft.date = "May 1st".to_string();
        assert!(matches!(
            draft.validate(),
            Err(PlannerError::InvalidDate(_))
        ));
    }

    #[test]
    fn impossible_date_is_rejected() {
        let mut draft = make_draft();
        draft.date = "2024-02-30".to_string();
        assert!(draft.validate().is_err());
    }
}
