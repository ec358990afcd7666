use std::{fmt, process::ExitCode};

use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use weather_now_core::{Config, RecentSearches, SearchError, SearchPipeline, SearchSuccess};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-now", version, about = "Current weather for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the geocoding/forecast endpoints and request timeout.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Search repeatedly, picking from recent searches.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure().map(|()| ExitCode::SUCCESS),
            Command::Show { city } => show(&city).await,
            Command::Interactive => interactive().await.map(|()| ExitCode::SUCCESS),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let current = Config::load()?;

    let geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&current.geocoding_url)
        .prompt()?;
    let forecast_url = Text::new("Forecast endpoint:")
        .with_default(&current.forecast_url)
        .prompt()?;
    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(current.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    let config = Config { geocoding_url, forecast_url, timeout_secs };
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<ExitCode> {
    let pipeline = SearchPipeline::from_config(&Config::load()?)?;

    let (text, succeeded) = report(pipeline.search(city).await);
    println!("{text}");
    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Text to print for one search outcome, and whether the search succeeded.
fn report(outcome: Result<Option<SearchSuccess>, SearchError>) -> (String, bool) {
    match outcome {
        Ok(Some(ok)) => (render::card(&ok.view), true),
        Ok(None) => (render::WELCOME.to_string(), true),
        Err(err) => (render::error(&err.user_message()), false),
    }
}

async fn interactive() -> anyhow::Result<()> {
    let pipeline = SearchPipeline::from_config(&Config::load()?)?;

    println!("{}", render::WELCOME);

    while let Some(query) = next_query(&pipeline.history())? {
        if query.trim().is_empty() {
            continue;
        }

        println!("{}", render::searching(&query));
        let (text, _) = report(pipeline.search(&query).await);
        println!("\n{text}\n");

        let recent = render::history(&pipeline.history());
        if !recent.is_empty() {
            println!("{recent}\n");
        }
    }

    Ok(())
}

enum Choice {
    NewSearch,
    Recent(String),
    Quit,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::NewSearch => f.write_str("🔍 New search"),
            Choice::Recent(label) => f.write_str(label),
            Choice::Quit => f.write_str("Quit"),
        }
    }
}

/// Ask for the next city. `None` means the user wants to stop.
fn next_query(recent: &RecentSearches) -> anyhow::Result<Option<String>> {
    if !recent.is_empty() {
        let options = std::iter::once(Choice::NewSearch)
            .chain(recent.iter().map(|label| Choice::Recent(label.to_string())))
            .chain(std::iter::once(Choice::Quit))
            .collect();

        match cancellable(Select::new("Search:", options).prompt())? {
            Some(Choice::Recent(label)) => return Ok(Some(label)),
            Some(Choice::NewSearch) => {}
            Some(Choice::Quit) | None => return Ok(None),
        }
    }

    let city = cancellable(
        Text::new("City:")
            .with_placeholder("Enter city name...")
            .prompt(),
    )?;

    Ok(city)
}

fn cancellable<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
