// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pulse - anonymous team-culture survey with AI-assisted analysis.
//!
//! Binary entry point: loads configuration, initializes logging, and
//! dispatches to the command implementations.

mod commands;
mod dashboard;
mod shell;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Pulse - anonymous team-culture survey with AI-assisted analysis.
#[derive(Parser, Debug)]
#[command(name = "pulse", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Record one anonymous feedback entry.
    Submit {
        /// Mood rating, 1 (most negative) to 5 (most positive).
        #[arg(short, long)]
        mood: u8,
        /// Free-text feedback.
        #[arg(short, long)]
        text: String,
    },
    /// List all feedback, most recent first.
    List,
    /// Show the mood distribution and average.
    Stats,
    /// Request an AI analysis of the full feedback corpus.
    Analyze,
    /// Seed the store with demo feedback (replaces existing data).
    Demo,
    /// Discard all feedback.
    Clear,
    /// Launch an interactive session.
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match pulse_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            pulse_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.survey.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Submit { mood, text }) => commands::submit(&config, &text, mood).await,
        Some(Commands::List) => commands::list(&config).await,
        Some(Commands::Stats) => commands::stats(&config).await,
        Some(Commands::Analyze) => commands::analyze(&config).await,
        Some(Commands::Demo) => commands::demo(&config).await,
        Some(Commands::Clear) => commands::clear(&config).await,
        Some(Commands::Shell) => shell::run_shell(config).await,
        None => {
            println!("pulse: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        shell::render_error(&e);
        std::process::exit(1);
    }
}
