use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::utils::tui::spinner;
use planner_cli::store::App;

pub async fn run(app: &mut App, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this event?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let sp = spinner("Deleting event");
    let result = app.delete_event(id).await;
    sp.finish_and_clear();

    match result {
        Ok(()) => {
            println!("{}", format!("Deleted event #{}", id).green());
            Ok(())
        }
        Err(err) => {
            eprintln!(
                "{}",
                "There was a problem deleting the event. Please try again.".red()
            );
            Err(err)
        }
    }
}
