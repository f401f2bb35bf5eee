use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::spinner;
use planner_cli::store::App;

pub async fn run(app: &mut App) -> Result<()> {
    let sp = spinner("Fetching guests");
    let result = app.load_guests_and_rsvps().await;
    sp.finish_and_clear();
    result?;

    if app.store.guests.is_empty() {
        println!("{}", "No guests found".dimmed());
        return Ok(());
    }

    for guest in &app.store.guests {
        let count = app.store.rsvp_count(guest.id);
        let label = if count == 1 { "event" } else { "events" };
        println!(
            "  {} {}",
            guest.name,
            format!("(attending {} {})", count, label).dimmed()
        );
    }

    Ok(())
}
