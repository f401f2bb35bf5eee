mod commands;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use planner_cli::client::ApiClient;
use planner_cli::config::Config;
use planner_cli::store::App;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Admin console for the planner events API")]
struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive admin console (the default when no subcommand is given)
    Console,

    /// List all events
    Events,

    /// Show one event with its guest list
    Show {
        /// Event id
        id: i64,
    },

    /// Create a new event
    New {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        description: String,

        #[arg(short, long)]
        location: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short = 'D', long)]
        date: String,
    },

    /// Delete an event
    Delete {
        /// Event id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List guests with how many events each is attending
    Guests,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let base_url = cli.base_url.unwrap_or(config.api_base_url);
    let mut app = App::new(ApiClient::new(base_url));

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => commands::console::run(&mut app).await,
        Commands::Events => commands::events::run(&mut app).await,
        Commands::Show { id } => commands::show::run(&mut app, id).await,
        Commands::New {
            name,
            description,
            location,
            date,
        } => commands::new::run(&mut app, name, description, location, date).await,
        Commands::Delete { id, yes } => commands::delete::run(&mut app, id, yes).await,
        Commands::Guests => commands::guests::run(&mut app).await,
    }
}
