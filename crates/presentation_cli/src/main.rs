//! Breeze CLI
//!
//! Command-line surface for the city weather lookup, the live local clock,
//! and the persisted theme preference.

#![allow(clippy::print_stdout)]

use std::io::Write as _;
use std::sync::Arc;

use application::{LocalClock, ThemeService, WeatherService};
use clap::{Parser, Subcommand};
use domain::entities::WeatherReport;
use domain::value_objects::{ThemeMode, UtcOffset};
use infrastructure::{AppConfig, OpenWeatherAdapter, SqliteThemeStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Breeze CLI
#[derive(Parser)]
#[command(name = "breeze-cli")]
#[command(author, version, about = "City weather with a live local clock", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the current weather for a city
    Weather {
        /// City to look up (falls back to `default_city` from the config)
        city: Option<String>,

        /// Keep running and update the city's local time every second
        #[arg(long)]
        watch: bool,
    },

    /// Run the live clock for a fixed UTC offset
    Clock {
        /// Offset from UTC in seconds (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        offset_seconds: i32,
    },

    /// Show or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the effective theme
    Show,

    /// Flip between light and dark
    Toggle,

    /// Set an explicit theme
    Set {
        /// "light" or "dark"
        mode: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render the weather card for a report
fn render_report(report: &WeatherReport) -> String {
    let heading = report.country().map_or_else(
        || report.city().to_string(),
        |country| format!("{}, {country}", report.city()),
    );

    format!(
        "🌍 {heading}\n🌡  {}°  {}\n💧 Humidity {}   💨 Wind {}",
        report.temperature().rounded(),
        report.condition_display(),
        report.humidity(),
        report.wind_speed(),
    )
}

/// Run the clock until Ctrl-C, rewriting the time line on every tick
async fn run_clock(offset: UtcOffset) -> anyhow::Result<()> {
    let mut clock = LocalClock::new();
    clock.set_offset(Some(offset));
    let mut display = clock.subscribe();

    // The first reading is published on the transition itself.
    if let Some(time) = clock.display() {
        print!("🕐 Local time ({offset}): {time}");
        std::io::stdout().flush()?;
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = display.changed() => {
                if changed.is_err() {
                    break;
                }
                let time = display.borrow().clone().unwrap_or_default();
                print!("\r🕐 Local time ({offset}): {time}");
                std::io::stdout().flush()?;
            }
        }
    }

    clock.shutdown();
    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Weather { city, watch } => {
            let config = AppConfig::load()?;
            let query = city.or_else(|| config.default_city.clone()).ok_or_else(|| {
                anyhow::anyhow!("no city given and no default_city configured")
            })?;

            let adapter = OpenWeatherAdapter::with_config(config.weather)?;
            let service = WeatherService::new(Arc::new(adapter));
            let report = service.lookup(&query).await?;

            println!("{}", render_report(&report));

            let offset = report.utc_offset();
            if watch {
                run_clock(offset).await?;
            } else {
                let mut clock = LocalClock::new();
                clock.set_offset(Some(offset));
                if let Some(time) = clock.display() {
                    println!("🕐 Local time ({offset}): {time}");
                }
                clock.shutdown();
            }
        },

        Commands::Clock { offset_seconds } => {
            run_clock(UtcOffset::from_seconds(offset_seconds)).await?;
        },

        Commands::Theme { action } => {
            let config = AppConfig::load()?;
            let store = SqliteThemeStore::open(&config.database.path)?;
            let themes = ThemeService::new(Arc::new(store));

            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => {
                    println!("🎨 Theme: {}", themes.current().await?);
                },
                ThemeAction::Toggle => {
                    println!("🎨 Theme switched to {}", themes.toggle().await?);
                },
                ThemeAction::Set { mode } => {
                    let mode: ThemeMode = mode.parse()?;
                    themes.set(mode).await?;
                    println!("🎨 Theme set to {mode}");
                },
            }
        },
    }

    Ok(())
}
