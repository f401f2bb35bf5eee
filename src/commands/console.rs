//! Interactive admin console.
//!
//! The loop is: render the whole view from the store, prompt for one
//! action, run it, repeat. Mutation failures are surfaced loudly; fetch
//! failures are only logged and the view keeps showing the last good data.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::utils::tui::spinner;
use planner_cli::render;
use planner_cli::store::App;
use planner_core::EventDraft;

pub async fn run(app: &mut App) -> Result<()> {
    // Initial sync. If it fails the console still opens with an empty
    // store, and a later refresh can recover.
    refresh(app).await;

    loop {
        println!();
        print!("{}", render::view(&app.store));
        println!();

        let actions = [
            "Select an event",
            "Create a new event",
            "Delete selected event",
            "Refresh",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => select_event(app).await?,
            1 => create_event(app).await?,
            2 => delete_selected(app).await?,
            3 => refresh(app).await,
            _ => break,
        }
    }

    Ok(())
}

/// Re-fetch everything. Fetch failures never abort the console; the view
/// just goes stale until the next successful refresh.
async fn refresh(app: &mut App) {
    let sp = spinner("Syncing with the planner API");
    let events = app.load_events().await;
    let guests = app.load_guests_and_rsvps().await;
    sp.finish_and_clear();

    if let Err(err) = events {
        eprintln!("{}", format!("Error fetching events: {:#}", err).red());
    }
    if let Err(err) = guests {
        eprintln!("{}", format!("Error fetching guests or rsvps: {:#}", err).red());
    }
}

async fn select_event(app: &mut App) -> Result<()> {
    if app.store.events.is_empty() {
        println!("{}", "No events to select".dimmed());
        return Ok(());
    }

    let labels: Vec<String> = app
        .store
        .events
        .iter()
        .map(|e| format!("{} ({})", e.name, render::format_event_date(e)))
        .collect();
    let index = Select::new()
        .with_prompt("Event")
        .items(&labels)
        .default(0)
        .interact()?;
    let id = app.store.events[index].id;

    let sp = spinner("Fetching event");
    let result = app.load_event(id).await;
    sp.finish_and_clear();

    // Failure keeps the previous selection
    if let Err(err) = result {
        eprintln!("{}", format!("Error fetching event {}: {:#}", id, err).red());
    }
    Ok(())
}

async fn create_event(app: &mut App) -> Result<()> {
    let draft = EventDraft {
        name: prompt("  Name")?,
        description: prompt("  Description")?,
        location: prompt("  Location")?,
        date: prompt("  Date (YYYY-MM-DD)")?,
    };

    // Client-side validation: an invalid draft never reaches the network.
    let new_event = match draft.validate() {
        Ok(new_event) => new_event,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return Ok(());
        }
    };

    let sp = spinner("Creating event");
    let result = app.create_event(&new_event).await;
    sp.finish_and_clear();

    match result {
        Ok(created) => println!("{}", format!("Created: {}", created.name).green()),
        Err(err) => {
            eprintln!("{}", format!("Error creating event: {:#}", err).dimmed());
            eprintln!(
                "{}",
                "There was a problem creating the event. Please check the fields and try again."
                    .red()
            );
        }
    }
    Ok(())
}

async fn delete_selected(app: &mut App) -> Result<()> {
    let Some(selected) = &app.store.selected else {
        println!("{}", "No event selected".dimmed());
        return Ok(());
    };
    let id = selected.id;

    let confirmed = Confirm::new()
        .with_prompt("Are you sure you want to delete this event?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    let sp = spinner("Deleting event");
    let result = app.delete_event(id).await;
    sp.finish_and_clear();

    match result {
        Ok(()) => println!("{}", "Event deleted".green()),
        Err(err) => {
            eprintln!("{}", format!("Error deleting event: {:#}", err).dimmed());
            eprintln!(
                "{}",
                "There was a problem deleting the event. Please try again.".red()
            );
        }
    }
    Ok(())
}

/// Free-text prompt. Empty input is allowed here so that validation can
/// report which field is missing.
fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}
