use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

mod api_client;
mod commands;
mod config;
mod error;
mod logging;
mod paging;
mod tui;

use api_client::ApiClient;
use config::Config;
use error::Result;

#[derive(Parser)]
#[command(
    name = "paydeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal dashboard for the paydeck payments service"
)]
struct Cli {
    /// Override the configured server URL
    #[arg(long, global = true)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the most recent payments and exit
    History {
        /// Number of records to fetch
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the upcoming payment schedule and exit
    Schedule {
        /// Number of records to fetch
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();
    if let Some(url) = cli.server_url {
        config.server_url = url;
    }
    let client = Arc::new(ApiClient::new(&config.server_url));

    match cli.command {
        Some(Command::History { limit }) => {
            logging::init_cli();
            commands::show_history(&client, limit.unwrap_or(config.history_page_size))
        }
        Some(Command::Schedule { limit }) => {
            logging::init_cli();
            commands::show_schedule(&client, limit.unwrap_or(config.schedule_page_size))
        }
        None => {
            logging::init_tui()?;
            tui::run(config, client)
        }
    }
}
