//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipscope` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use ipscope::config::TOKEN_ENV_VAR;
use ipscope::export::{renderer_for, ExportFormat};
use ipscope::initialization::init_logger_with;
use ipscope::present::LinkMap;
use ipscope::storage::{load_theme, save_theme, KeyValueStore, Theme};
use ipscope::{AppController, Config, HistoryStore, LogFormat, LogLevel};

#[derive(Parser)]
#[command(
    name = "ipscope",
    version,
    about = "Look up geolocation and network metadata for IP addresses"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    log_format: LogFormat,

    /// Provider access token (falls back to the IPSCOPE_TOKEN env var)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Data directory for history and preferences
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// User-Agent string used for requests and device classification
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up an IPv4 address
    Lookup {
        /// The IPv4 address to look up
        ip: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Detect and look up the current device's own address
    Detect {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Replay a past lookup from the history without re-querying
    Replay {
        /// The IPv4 address of the history entry to replay
        ip: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the lookup history, newest first
    History,
    /// Clear the lookup history
    ClearHistory {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show or set the display theme
    Theme {
        /// Theme to select; prints the current theme when omitted
        #[arg(value_enum)]
        name: Option<Theme>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write a report document after the lookup
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Directory to write reports into
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Print the looked-up IP on its own line for piping
    #[arg(long)]
    copy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting IPSCOPE_TOKEN in .env without exporting it manually.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("ipscope error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli);

    match cli.command {
        Command::Lookup { ip, output } => {
            let mut controller = build_controller(&config, &output)?;
            controller.search(&ip).await?;
            controller.render_current();
            finish_output(&controller, &output)?;
        }
        Command::Detect { output } => {
            let mut controller = build_controller(&config, &output)?;
            controller.detect_current().await?;
            controller.render_current();
            finish_output(&controller, &output)?;
        }
        Command::Replay { ip, output } => {
            let mut controller = build_controller(&config, &output)?;
            controller.select_history(&ip)?;
            controller.render_current();
            finish_output(&controller, &output)?;
        }
        Command::History => {
            let store = KeyValueStore::open(&config.data_dir)
                .context("Failed to open the data directory")?;
            print_history(&HistoryStore::load(store));
        }
        Command::ClearHistory { yes } => {
            let mut controller = build_controller_bare(&config)?;
            let count = controller.history().len();
            if count == 0 {
                println!("The lookup history is already empty.");
                return Ok(());
            }
            if yes || confirm_clear(count)? {
                controller.clear_history();
                println!("Lookup history cleared.");
            } else {
                println!("Aborted.");
            }
        }
        Command::Theme { name } => {
            let store = KeyValueStore::open(&config.data_dir)
                .context("Failed to open the data directory")?;
            match name {
                Some(theme) => {
                    save_theme(&store, theme).context("Failed to save theme preference")?;
                    println!("Theme set to {theme}.");
                }
                None => println!("{}", load_theme(&store)),
            }
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config {
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.clone(),
        ..Default::default()
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(ua) = &cli.user_agent {
        config.user_agent = ua.clone();
    }
    config.token = cli
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok());
    config
}

fn build_controller_bare(config: &Config) -> Result<AppController<LinkMap>> {
    AppController::new(config, LinkMap).context("Failed to initialize")
}

fn build_controller(config: &Config, output: &OutputArgs) -> Result<AppController<LinkMap>> {
    let mut controller = build_controller_bare(config)?;
    if let Some(format) = output.export {
        controller = controller.with_renderer(renderer_for(format));
    }
    Ok(controller)
}

fn finish_output(controller: &AppController<LinkMap>, output: &OutputArgs) -> Result<()> {
    if output.copy {
        println!("{}", controller.copy_current_ip()?);
    }
    if output.export.is_some() {
        let path = controller.export_report(&output.out)?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

fn print_history(history: &HistoryStore) {
    if history.is_empty() {
        println!("No lookups recorded yet.");
        return;
    }
    for entry in history.all() {
        let when = Utc
            .timestamp_millis_opt(entry.timestamp_ms)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.timestamp_ms.to_string());
        println!(
            "{}  {:<15}  {}",
            when.dimmed(),
            entry.ip.cyan(),
            entry.location_summary
        );
    }
}

fn confirm_clear(count: usize) -> Result<bool> {
    print!(
        "Clear {count} history entr{}? [y/N] ",
        if count == 1 { "y" } else { "ies" }
    );
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read confirmation")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
