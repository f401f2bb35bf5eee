//! HTTP client for the planner events API.
//!
//! Every endpoint wraps its payload in a `{"data": ...}` envelope. Reads
//! simply parse whatever comes back; the two mutations (create, delete)
//! check the status code first and fail on anything non-2xx. No retries,
//! no deduplication: each call maps to exactly one request.

use anyhow::{Context, Result};

use planner_core::protocol::Envelope;
use planner_core::{Event, Guest, NewEvent, Rsvp};

/// Thin reqwest wrapper over the configured API base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /events
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .send()
            .await
            .context("Failed to reach the events API")?;

        let envelope: Envelope<Vec<Event>> = resp
            .json()
            .await
            .context("Failed to parse events response")?;

        Ok(envelope.into_inner())
    }

    /// GET /events/:id
    pub async fn get_event(&self, id: i64) -> Result<Event> {
        let resp = self
            .http
            .get(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .with_context(|| format!("Failed to fetch event {}", id))?;

        let envelope: Envelope<Event> = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse event {} response", id))?;

        Ok(envelope.into_inner())
    }

    /// GET /guests
    pub async fn get_guests(&self) -> Result<Vec<Guest>> {
        let resp = self
            .http
            .get(format!("{}/guests", self.base_url))
            .send()
            .await
            .context("Failed to reach the guests API")?;

        let envelope: Envelope<Vec<Guest>> = resp
            .json()
            .await
            .context("Failed to parse guests response")?;

        Ok(envelope.into_inner())
    }

    /// GET /rsvps
    pub async fn get_rsvps(&self) -> Result<Vec<Rsvp>> {
        let resp = self
            .http
            .get(format!("{}/rsvps", self.base_url))
            .send()
            .await
            .context("Failed to reach the rsvps API")?;

        let envelope: Envelope<Vec<Rsvp>> = resp
            .json()
            .await
            .context("Failed to parse rsvps response")?;

        Ok(envelope.into_inner())
    }

    /// POST /events
    pub async fn create_event(&self, new_event: &NewEvent) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/events", self.base_url))
            .json(new_event)
            .send()
            .await
            .context("Failed to reach the events API")?;

        if !resp.status().is_success() {
            anyhow::bail!("Event creation rejected with status {}", resp.status());
        }

        let envelope: Envelope<Event> = resp
            .json()
            .await
            .context("Failed to parse created event response")?;

        Ok(envelope.into_inner())
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .with_context(|| format!("Failed to delete event {}", id))?;

        if !resp.status().is_success() {
            anyhow::bail!("Event deletion rejected with status {}", resp.status());
        }

        Ok(())
    }
}
