use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::spinner;
use planner_cli::render;
use planner_cli::store::App;

pub async fn run(app: &mut App, id: i64) -> Result<()> {
    let sp = spinner("Fetching event");
    let result = app.load_event(id).await;
    sp.finish_and_clear();
    result?;

    // Guest data only affects the attendance block; if it cannot be
    // fetched the event details still print without it.
    if let Err(err) = app.load_guests_and_rsvps().await {
        eprintln!(
            "{}",
            format!("Could not fetch guests or rsvps: {:#}", err).dimmed()
        );
    }

    print!("{}", render::details(&app.store));

    Ok(())
}
