use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tracing::debug;
use weather_widget_core::{
    Config, SystemClock, WeatherProvider, WeatherWidget, provider_from_config, widget::view,
};

use crate::render::{header, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key.
    Configure,

    /// Look up one city and exit.
    Show {
        /// City or location name.
        city: String,
    },

    /// Prompt for cities until cancelled (the default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city } => {
                let mut widget = widget_from_config()?;
                widget.submit(&city).await;
                print!("{}", render(&widget.view(&SystemClock)));
                Ok(())
            }
            Command::Interactive => interactive(widget_from_config()?).await,
        }
    }
}

fn widget_from_config() -> anyhow::Result<WeatherWidget<Box<dyn WeatherProvider>>> {
    let config = Config::load()?;
    debug!(
        endpoint = config.endpoint(),
        has_key = config.api_key.is_some(),
        "loaded configuration"
    );
    Ok(WeatherWidget::new(provider_from_config(&config)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("weatherapi.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive<P: WeatherProvider>(mut widget: WeatherWidget<P>) -> anyhow::Result<()> {
    println!("{}", header(&widget.view(&SystemClock)));

    loop {
        let prompt = Text::new("City:")
            .with_placeholder(view::PLACEHOLDER)
            .with_initial_value(&widget.state().query)
            .prompt();

        let query = match prompt {
            Ok(query) => query,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        widget.set_query(query);
        if let Some(city) = widget.begin_submit() {
            println!("{}", widget.view(&SystemClock).button_label);
            let outcome = widget.provider().fetch_weather(&city).await;
            widget.settle(outcome);
        }

        print!("{}", render(&widget.view(&SystemClock)));
    }

    Ok(())
}
