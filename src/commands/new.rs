use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::spinner;
use planner_cli::store::App;
use planner_core::EventDraft;

pub async fn run(
    app: &mut App,
    name: String,
    description: String,
    location: String,
    date: String,
) -> Result<()> {
    let draft = EventDraft {
        name,
        description,
        location,
        date,
    };

    // Validation happens before any request goes out
    let new_event = draft.validate()?;

    let sp = spinner("Creating event");
    let result = app.create_event(&new_event).await;
    sp.finish_and_clear();

    match result {
        Ok(created) => {
            println!(
                "{}",
                format!("Created: {} (#{})", created.name, created.id).green()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!(
                "{}",
                "There was a problem creating the event. Please check the fields and try again."
                    .red()
            );
            Err(err)
        }
    }
}
