mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventboard_core::category::parse_selection;
use eventboard_core::{BoardConfig, Category, EventId, EventSource, Route, Source};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::Board;
use crate::commands::add::DraftArgs;

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(
    about = "Browse, search and filter the event list; add, edit and delete events in memory"
)]
struct Cli {
    /// Read events from this URL or file instead of the configured source
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the (filtered) event list
    List {
        /// Only events whose title contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only events in this category (code 1-5 or label)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Add an event; missing fields are prompted for
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Image URL
        #[arg(short, long)]
        image: Option<String>,

        /// Start time (e.g., "2026-03-20T18:00")
        #[arg(short, long)]
        start: Option<String>,

        /// End time (e.g., "2026-03-20T21:00")
        #[arg(short, long)]
        end: Option<String>,

        /// Category (code 1-5 or label)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Remove an event from the list
    Delete { id: EventId },
    /// Go to the edit page of an event
    Edit {
        id: EventId,

        /// Open the page in the browser
        #[arg(long)]
        open: bool,
    },
    /// Go to the detail page of an event
    Show {
        id: EventId,

        /// Open the page in the browser
        #[arg(long)]
        open: bool,
    },
    /// List the categories
    Categories,
    /// Interactive session
    Browse,
    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let board = load_board(cli.source.as_deref())?;

    match cli.command {
        Commands::List { search, category } => commands::list::run(&board, search, category).await,
        Commands::Add {
            title,
            description,
            image,
            start,
            end,
            category,
        } => {
            let args = DraftArgs {
                title,
                description,
                image,
                start,
                end,
                category,
            };
            commands::add::run(&board, args).await
        }
        Commands::Delete { id } => commands::delete::run(&board, id).await,
        Commands::Edit { id, open } => commands::open::run(&board, Route::EditEvent(id), open),
        Commands::Show { id, open } => commands::open::run(&board, Route::Event(id), open),
        Commands::Categories => {
            commands::categories::run();
            Ok(())
        }
        Commands::Browse => commands::browse::run(&board).await,
        Commands::Config => commands::config::run(&board),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_board(source_arg: Option<&str>) -> Result<Board> {
    let config = BoardConfig::load()?;

    let source = match source_arg {
        Some(arg) => Source::from_arg(arg, &config)?,
        None => Source::from_config(&config)?,
    };
    debug!(source = %source.describe(), "events source");

    Ok(Board { config, source })
}

fn parse_category(value: &str) -> Result<Category, String> {
    parse_selection(value)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Category cannot be empty".to_string())
}
