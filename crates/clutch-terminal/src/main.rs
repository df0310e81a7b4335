//! Entry point for the `clutch` terminal client.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use clutch_app::{Coordinates, LocationProvider};
use clutch_terminal::config::{Config, ThemeChoice};
use clutch_terminal::location::{EnvLocationProvider, FixedLocationProvider};
use clutch_terminal::tui::styles::{ColorPalette, Styles};
use clutch_terminal::tui::{AppEvent, TuiApp};

#[derive(Parser)]
#[command(name = "clutch", about = "Clutch Club terminal client", long_about = None)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "clutch.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive terminal interface (default)
    Tui,
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_tracing(&config, cli.verbose)?;
            run_tui(config).await
        }
        Commands::Version => {
            println!("clutch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Sends tracing to a file so log lines never corrupt the alternate screen.
fn init_tracing(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path.display()))?;
    let fallback = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;
    Ok(())
}

async fn run_tui(config: Config) -> anyhow::Result<()> {
    let palette = match config.theme {
        ThemeChoice::Dark => ColorPalette::dark(),
        ThemeChoice::Light => ColorPalette::light(),
    };
    let mut app = TuiApp::new(Styles::new(palette));

    let (tx, rx) = mpsc::unbounded_channel();
    app.set_event_receiver(rx);

    let provider: Box<dyn LocationProvider> = match config.location {
        Some(fixed) => Box::new(FixedLocationProvider::new(Coordinates {
            latitude: fixed.latitude,
            longitude: fixed.longitude,
        })),
        None => Box::new(EnvLocationProvider),
    };
    // One-shot lookup; the shell keeps the default coordinates until (and
    // unless) a fix arrives.
    tokio::spawn(async move {
        match provider.current_position().await {
            Ok(coordinates) => {
                if tx.send(AppEvent::LocationFix(coordinates)).is_err() {
                    tracing::debug!("interface closed before the location fix arrived");
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "location unavailable, keeping default coordinates");
            }
        }
    });

    app.run().await?;
    Ok(())
}
