use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::spinner;
use planner_cli::render;
use planner_cli::store::App;

pub async fn run(app: &mut App) -> Result<()> {
    let sp = spinner("Fetching events");
    let result = app.load_events().await;
    sp.finish_and_clear();
    result?;

    if app.store.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &app.store.events {
        let id_tag = format!("{:>5}", format!("#{}", event.id));
        println!(
            "  {} {} {}",
            id_tag.dimmed(),
            event.name,
            render::format_event_date(event).dimmed()
        );
    }

    Ok(())
}
