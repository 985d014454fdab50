//! Mansion Mystery - Main entrypoint.
//!
//! Parses the command line, loads configuration, initializes logging and
//! runs a game session on the terminal.

use clap::{Parser, Subcommand};
use mansion_mystery_lib::config::{self, ConfigLoader, LogConfig, MysteryConfig, ENV_PREFIX};
use mansion_mystery_lib::error::{MysteryError, MysteryResult};
use mansion_mystery_lib::game::Game;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the mansion mystery.
#[derive(Parser, Debug)]
#[clap(name = "Mansion Mystery", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Play a session on the terminal
    Play,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so the game transcript on stdout stays readable.
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> MysteryResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MysteryError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Records the effective configuration once a subscriber can receive it.
fn log_loaded_config(config: &MysteryConfig) {
    debug!(?config, "configuration loaded");
}

/// Main entry point for the application.
fn main() -> MysteryResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    // Logging needs the configuration, so a broken one is logged with defaults
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    log_loaded_config(&config);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let game = Game::new(config.game)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            game.play(&mut stdin.lock(), &mut stdout.lock())?;
            Ok(())
        }
        Command::Validate => {
            // Also check the start room against the mansion
            Game::new(config.game)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid.");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = config::to_toml(&MysteryConfig::default())?;

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
