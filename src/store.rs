//! Application state and the operations that mutate it.
//!
//! The store is a single owned struct, passed around explicitly instead of
//! living in globals. Every operation follows the same contract: on success
//! the affected collections are replaced wholesale; on failure the store is
//! left exactly as it was, so the view keeps showing the last good data.

use anyhow::Result;

use crate::client::ApiClient;
use planner_core::{Event, Guest, NewEvent, Rsvp};

/// Last-fetched collections plus the current selection.
#[derive(Debug, Default)]
pub struct Store {
    pub events: Vec<Event>,
    pub selected: Option<Event>,
    pub guests: Vec<Guest>,
    pub rsvps: Vec<Rsvp>,
}

impl Store {
    /// Guests attending the currently selected event: those with an rsvp
    /// whose `event_id` matches the selection. Rsvps pointing at unknown
    /// guests are skipped. Empty when nothing is selected.
    pub fn attendance(&self) -> Vec<&Guest> {
        let Some(selected) = &self.selected else {
            return Vec::new();
        };

        self.guests
            .iter()
            .filter(|guest| {
                self.rsvps
                    .iter()
                    .any(|r| r.event_id == selected.id && r.guest_id == guest.id)
            })
            .collect()
    }

    /// Number of events a guest has an rsvp for.
    pub fn rsvp_count(&self, guest_id: i64) -> usize {
        self.rsvps.iter().filter(|r| r.guest_id == guest_id).count()
    }
}

/// The store together with the API client that feeds it.
pub struct App {
    pub store: Store,
    client: ApiClient,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        App {
            store: Store::default(),
            client,
        }
    }

    /// Refresh the events collection. On failure the previous events are
    /// kept; the caller decides whether to surface the error.
    pub async fn load_events(&mut self) -> Result<()> {
        let events = self.client.get_events().await?;
        self.store.events = events;
        Ok(())
    }

    /// Fetch one event by id and make it the selection. A failed fetch
    /// leaves the previous selection in place.
    pub async fn load_event(&mut self, id: i64) -> Result<()> {
        let event = self.client.get_event(id).await?;
        self.store.selected = Some(event);
        Ok(())
    }

    /// Refresh guests and rsvps together, all-or-nothing: neither
    /// collection is touched until both requests have succeeded.
    pub async fn load_guests_and_rsvps(&mut self) -> Result<()> {
        let guests = self.client.get_guests().await?;
        let rsvps = self.client.get_rsvps().await?;

        self.store.guests = guests;
        self.store.rsvps = rsvps;
        Ok(())
    }

    /// POST a validated event, then resync the events list from the server
    /// and select the created record. Nothing is mutated on failure.
    pub async fn create_event(&mut self, new_event: &NewEvent) -> Result<Event> {
        let created = self.client.create_event(new_event).await?;

        self.load_events().await?;
        self.store.selected = Some(created.clone());

        Ok(created)
    }

    /// DELETE an event, clearing the selection if it was the one deleted,
    /// then resync the events list. Confirmation is the caller's job.
    pub async fn delete_event(&mut self, id: i64) -> Result<()> {
        self.client.delete_event(id).await?;

        if self.store.selected.as_ref().is_some_and(|e| e.id == id) {
            self.store.selected = None;
        }
        self.load_events().await?;

        Ok(())
    }
}
