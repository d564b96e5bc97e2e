use anyhow::Result;
use clap::Parser;
use groupie_search::SearchField;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "groupie", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the artist catalog (default: ~/.local/share/groupie/artists.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search the artist catalog
    ///
    /// Matches the query as a case-insensitive substring against each
    /// artist's name and member names, and as a plain substring against
    /// the creation year. Every hit is reported with the field it came
    /// from and a fixed score:
    ///
    /// - artist name: 1000
    /// - member name: 900
    /// - creation year: 700
    /// - first album: 600 (only with --field first_album)
    ///
    /// Results are ordered by score; equal scores keep catalog order.
    /// An empty query matches nothing.
    Search {
        /// Text to look for
        query: String,

        /// Field to search (repeatable; replaces the defaults):
        /// name, members, creation_date, first_album
        #[arg(long = "field", value_name = "FIELD")]
        fields: Vec<SearchField>,

        /// Keep only the N best matches
        #[arg(long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if missing
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.data {
        Some(data) => Config::load_with_data_path(data)?,
        None => Config::load()?,
    };

    logging::init(&config.logging)?;

    match cli.command {
        Commands::Search {
            query,
            fields,
            limit,
            json,
        } => {
            commands::run_search(&config.data_path, &query, fields, limit, json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
