//! Terminal rendering of the store.
//!
//! The whole view is rebuilt from scratch on every call: a pure function of
//! the store with no memoization and no diffing. The console prints the
//! result after every operation, so whatever the store holds is exactly
//! what the user sees.

use owo_colors::OwoColorize;

use crate::store::Store;
use planner_core::Event;

/// Render the full admin view: header, event list, details panel.
pub fn view(store: &Store) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Event Planner Admin".bold()));

    out.push_str(&format!("{}\n", "Upcoming Events".underline()));
    out.push_str(&event_list(store));
    out.push('\n');

    out.push_str(&format!("{}\n", "Event Details".underline()));
    out.push_str(&details(store));

    out
}

/// One line per event; the selected entry gets a marker and color.
fn event_list(store: &Store) -> String {
    if store.events.is_empty() {
        return format!("  {}\n", "No events yet".dimmed());
    }

    let mut out = String::new();
    for event in &store.events {
        let selected = store.selected.as_ref().is_some_and(|s| s.id == event.id);
        if selected {
            out.push_str(&format!("  {} {}\n", "▸".blue(), event.name.bold().blue()));
        } else {
            out.push_str(&format!("    {}\n", event.name));
        }
    }
    out
}

/// The selected event's fields plus its guest list, or a placeholder.
pub fn details(store: &Store) -> String {
    let Some(event) = &store.selected else {
        return format!(
            "  {}\n",
            "Please select an event to view details.".dimmed()
        );
    };

    let mut out = String::new();
    out.push_str(&format!("  {} {}\n", event.name.bold(), format!("#{}", event.id).dimmed()));
    out.push_str(&format!("  {} {}\n", label("Date"), format_event_date(event)));
    out.push_str(&format!("  {} {}\n", label("Location"), event.location));
    out.push_str(&format!("  {} {}\n", label("Description"), event.description));

    if let Some(guests) = guest_list(store) {
        out.push('\n');
        out.push_str(&guests);
    }

    out
}

/// Pad the field label before styling so the ANSI codes don't skew the
/// column width.
fn label(name: &str) -> String {
    format!("{:<12}", name).dimmed().to_string()
}

/// Guests attending the selected event. `None` when there is no selection
/// or nobody is attending, in which case the block is omitted entirely.
fn guest_list(store: &Store) -> Option<String> {
    let attending = store.attendance();
    if attending.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(&format!("  Guests Attending ({})\n", attending.len()));
    for guest in attending {
        out.push_str(&format!("   {} {}\n", "•".dimmed(), guest.name));
    }
    Some(out)
}

/// Format an event date for display, e.g. "Wed May 1, 2024 00:00".
pub fn format_event_date(event: &Event) -> String {
    event.date.format("%a %b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use planner_core::{Guest, Rsvp};

    fn make_event(id: i64, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            description: "a party".to_string(),
            location: "HQ rooftop".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn placeholder_when_nothing_selected() {
        let store = Store {
            events: vec![make_event(1, "Launch")],
            ..Store::default()
        };
        assert!(view(&store).contains("Please select an event"));
    }

    #[test]
    fn details_show_selected_event_fields() {
        let store = Store {
            events: vec![make_event(1, "Launch")],
            selected: Some(make_event(1, "Launch")),
            ..Store::default()
        };
        let out = view(&store);
        assert!(out.contains("Launch"));
        assert!(out.contains("HQ rooftop"));
        assert!(out.contains("a party"));
        assert!(out.contains("#1"));
    }

    #[test]
    fn selected_entry_is_marked_in_the_list() {
        let store = Store {
            events: vec![make_event(1, "Launch"), make_event(2, "Retro")],
            selected: Some(make_event(2, "Retro")),
            ..Store::default()
        };
        let list = event_list(&store);
        let marked: Vec<_> = list.lines().filter(|l| l.contains('▸')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Retro"));
    }

    #[test]
    fn empty_event_list_has_placeholder() {
        let store = Store::default();
        assert!(event_list(&store).contains("No events yet"));
    }

    #[test]
    fn guest_block_lists_attending_guests() {
        let store = Store {
            events: vec![make_event(1, "Launch")],
            selected: Some(make_event(1, "Launch")),
            guests: vec![
                Guest { id: 10, name: "Ann".to_string() },
                Guest { id: 11, name: "Bo".to_string() },
            ],
            rsvps: vec![Rsvp { id: 100, event_id: 1, guest_id: 10 }],
        };
        let out = details(&store);
        assert!(out.contains("Guests Attending (1)"));
        assert!(out.contains("Ann"));
        assert!(!out.contains("Bo"));
    }

    #[test]
    fn guest_block_omitted_when_nobody_attends() {
        let store = Store {
            events: vec![make_event(1, "Launch")],
            selected: Some(make_event(1, "Launch")),
            guests: vec![Guest { id: 10, name: "Ann".to_string() }],
            rsvps: vec![],
        };
        assert!(!details(&store).contains("Guests Attending"));
    }

    #[test]
    fn date_is_humanized() {
        let event = make_event(1, "Launch");
        assert_eq!(format_event_date(&event), "Wed May 1, 2024 18:30");
    }
}
