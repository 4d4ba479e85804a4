use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pickem::commands::{self, parse_prediction, PredictionArg};
use pickem::config;
use pickem::data_provider::{FileProvider, TournamentDataProvider};
use pickem::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "pickem")]
#[command(version)]
#[command(about = "Round-robin tournament standings and predictions", long_about = "Round-robin tournament standings and predictions\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Teams file (overrides teams_file from the config)
    #[arg(long, global = true)]
    teams: Option<String>,

    /// Matches file (overrides matches_file from the config)
    #[arg(long, global = true)]
    matches: Option<String>,

    /// Use the built-in sample tournament instead of reading files
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display standings with bracket classification
    Standings {
        /// Predict a match winner: INDEX=TEAM_ID, or INDEX=none to clear (repeatable)
        #[arg(short, long = "predict", value_parser = parse_prediction)]
        predict: Vec<PredictionArg>,
    },
    /// Display the head-to-head matrix
    Matrix {
        /// Predict a match winner: INDEX=TEAM_ID, or INDEX=none to clear (repeatable)
        #[arg(short, long = "predict", value_parser = parse_prediction)]
        predict: Vec<PredictionArg>,
    },
    /// List matches without a result, with the index --predict expects
    Upcoming,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("teams_file: {}", cfg.teams_file);
    println!("matches_file: {}", cfg.matches_file);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[bracket]");
    println!("winners_max_rank: {}", cfg.bracket.winners_max_rank);
    println!("losers_max_rank: {}", cfg.bracket.losers_max_rank);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("header_fg: {:?}", cfg.display.header_fg);
    println!("winners_fg: {:?}", cfg.display.winners_fg);
    println!("losers_fg: {:?}", cfg.display.losers_fg);
    println!("eliminated_fg: {:?}", cfg.display.eliminated_fg);
    println!("win_fg: {:?}", cfg.display.win_fg);
    println!("loss_fg: {:?}", cfg.display.loss_fg);
    println!("predicted_fg: {:?}", cfg.display.predicted_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Pick the data source: sample data in demo mode, files otherwise.
/// CLI paths take precedence over the config file.
fn create_provider(cli: &Cli, config: &config::Config) -> Arc<dyn TournamentDataProvider> {
    #[cfg(feature = "development")]
    if cli.demo {
        return Arc::new(pickem::dev::MockProvider::new());
    }

    let teams = cli.teams.as_deref().unwrap_or(&config.teams_file);
    let matches = cli.matches.as_deref().unwrap_or(&config.matches_file);
    tracing::info!("Reading tournament from {} and {}", teams, matches);
    Arc::new(FileProvider::new(teams, matches))
}

async fn run(cli: Cli, config: config::Config) -> anyhow::Result<()> {
    let provider = create_provider(&cli, &config);

    match cli.command {
        None => {
            tui::run(provider, config).await?;
        }
        Some(Commands::Standings { predict }) => {
            commands::standings::run(provider.as_ref(), &predict, &config).await?;
        }
        Some(Commands::Matrix { predict }) => {
            commands::matrix::run(provider.as_ref(), &predict, &config).await?;
        }
        Some(Commands::Upcoming) => {
            commands::upcoming::run(provider.as_ref(), &config).await?;
        }
        Some(Commands::Config) => handle_config_command(&config),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = config::read();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    init_logging(log_level, log_file);
    tracing::debug!("Starting pickem");

    if let Err(e) = run(cli, config).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
