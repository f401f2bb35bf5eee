//! Records as returned by the upstream planner API.
//!
//! These mirror the API's JSON payloads field-for-field. Events are the only
//! records this client can create or delete; guests and rsvps are read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plannable occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Full ISO-8601 timestamp on the wire
    pub date: DateTime<Utc>,
}

/// A person who may attend events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

/// Join row confirming a guest's attendance at an event.
///
/// The API makes no consistency promise between collections: an rsvp may
/// reference an event or guest that no longer exists, and callers filter
/// such rows out at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: i64,
    pub event_id: i64,
    pub guest_id: i64,
}
