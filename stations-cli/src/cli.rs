use anyhow::Context;
use clap::{Parser, Subcommand};
use stations_core::{Config, FetchState, OutputFormat, SourceError, source};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "stations", version, about = "Weather station dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all weather stations in the network.
    List {
        /// Output format, "table" or "json"; if absent, the configured default.
        #[arg(long)]
        format: Option<String>,
    },

    /// Show the full record for one station.
    Show {
        /// Station identifier, e.g. "1".
        id: String,

        /// Output format, "table" or "json"; if absent, the configured default.
        #[arg(long)]
        format: Option<String>,
    },

    /// View historical data for a station. Not backed by a data store yet.
    History {
        /// Station identifier.
        id: String,
    },

    /// Export a station's data. Not backed by a data store yet.
    Export {
        /// Station identifier.
        id: String,
    },

    /// Configure alerts for a station. Not backed by a data store yet.
    Alerts {
        /// Station identifier.
        id: String,
    },

    /// Choose the default output format.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::List { format } => run_list(format).await,
            Command::Show { id, format } => run_show(&id, format).await,
            Command::History { id } => run_placeholder(&id, "Historical data").await,
            Command::Export { id } => run_placeholder(&id, "Data export").await,
            Command::Alerts { id } => run_placeholder(&id, "Alert configuration").await,
            Command::Configure => run_configure(),
        }
    }
}

/// Explicit `--format` wins; otherwise the configured default.
fn resolve_format(flag: Option<String>) -> anyhow::Result<OutputFormat> {
    match flag {
        Some(value) => OutputFormat::try_from(value.as_str()),
        None => Config::load()?.output_format(),
    }
}

async fn run_list(format: Option<String>) -> anyhow::Result<()> {
    let format = resolve_format(format)?;
    let source = source::default_source();

    tracing::debug!("rendering station list");
    let state = FetchState::from_result(source.all_stations().await);

    let page = match (format, &state) {
        (OutputFormat::Json, FetchState::Ready(stations)) => {
            let mut json = serde_json::to_string_pretty(stations)
                .context("Failed to serialize station list to JSON")?;
            json.push('\n');
            json
        }
        _ => render::station_list(&state),
    };

    print!("{page}");
    Ok(())
}

async fn run_show(id: &str, format: Option<String>) -> anyhow::Result<()> {
    let format = resolve_format(format)?;
    let source = source::default_source();

    tracing::debug!(id, "rendering station detail");
    let state = FetchState::from_result(source.station_by_id(id).await);

    let page = match (format, &state) {
        (OutputFormat::Json, FetchState::Ready(station)) => {
            let mut json = serde_json::to_string_pretty(station)
                .context("Failed to serialize station record to JSON")?;
            json.push('\n');
            json
        }
        _ => render::station_detail(&state),
    };

    print!("{page}");
    Ok(())
}

/// Named commands for the dashboard actions that have no backing operation
/// yet. The station is still looked up so a bad id surfaces the usual
/// not-found page.
async fn run_placeholder(id: &str, what: &str) -> anyhow::Result<()> {
    let source = source::default_source();

    match source.station_by_id(id).await {
        Ok(station) => {
            println!("{what} for {} (id {}) is not available yet.", station.name, station.id);
        }
        Err(SourceError::NotFound(_)) => {
            print!("{}", render::station_not_found(id));
        }
    }

    Ok(())
}

fn run_configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let options: Vec<&str> = OutputFormat::all().iter().map(OutputFormat::as_str).collect();
    let choice = inquire::Select::new("Default output format:", options)
        .prompt()
        .context("Failed to read format selection")?;

    let format = OutputFormat::try_from(choice)?;
    config.set_output_format(format);
    config.save()?;

    println!("Default output format set to '{format}'.");
    Ok(())
}
