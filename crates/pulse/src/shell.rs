// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pulse shell` command implementation.
//!
//! Launches an interactive REPL over a single dashboard session with
//! readline history. The session holds the collection snapshot and the
//! analysis cache; every mutation writes through the store and invalidates
//! any held analysis via the dashboard's revision tag.

use colored::Colorize;
use pulse_config::PulseConfig;
use pulse_core::{MoodMetrics, PulseError};
use pulse_gemini::GeminiClient;
use pulse_storage::{demo_entries, FeedbackStore};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::{print_analysis, print_entry, print_metrics};
use crate::dashboard::Dashboard;

/// Runs the `pulse shell` interactive REPL.
pub async fn run_shell(config: PulseConfig) -> Result<(), PulseError> {
    let store = FeedbackStore::open(&config.storage).await?;
    let mut dashboard = Dashboard::new(store.load().await);

    let mut rl = DefaultEditor::new()
        .map_err(|e| PulseError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "pulse shell".bold().green());
    println!(
        "Commands: {} <1-5> <text>, {}, {}, {}, {}, {}, {}\n",
        "submit".yellow(),
        "list".yellow(),
        "stats".yellow(),
        "analyze".yellow(),
        "demo".yellow(),
        "clear".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "pulse".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_command(&config, &store, &mut dashboard, trimmed).await {
                    render_error(&e);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Dispatch one shell command against the dashboard session.
async fn handle_command(
    config: &PulseConfig,
    store: &FeedbackStore,
    dashboard: &mut Dashboard,
    input: &str,
) -> Result<(), PulseError> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    };

    match command {
        "submit" => {
            let (mood_str, text) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                PulseError::Validation("usage: submit <mood 1-5> <text>".to_string())
            })?;
            let mood: u8 = mood_str.parse().map_err(|_| {
                PulseError::Validation(format!("`{mood_str}` is not a mood rating (1-5)"))
            })?;

            let (updated, entry) = store.add(dashboard.entries(), text, mood).await?;
            dashboard.apply_mutation(updated);
            debug!(id = %entry.id, revision = dashboard.revision(), "feedback submitted");
            println!("{} thank you for your feedback", "recorded".green());
        }
        "list" => {
            if dashboard.entries().is_empty() {
                println!("{}", "no feedback yet".dimmed());
            }
            for entry in dashboard.entries() {
                print_entry(entry);
            }
        }
        "stats" => {
            print_metrics(&MoodMetrics::compute(dashboard.entries()));
        }
        "analyze" => {
            run_analysis(config, dashboard).await?;
        }
        "demo" => {
            let seeded = store.replace_all(demo_entries()).await?;
            let count = seeded.len();
            dashboard.apply_mutation(seeded);
            println!("{} {count} demo entries", "seeded".green());
        }
        "clear" => {
            let cleared = store.clear().await?;
            dashboard.apply_mutation(cleared);
            println!("{}", "all feedback cleared".yellow());
        }
        other => {
            println!("{}: unknown command `{other}`", "error".red());
        }
    }
    Ok(())
}

/// Run one analysis request through the dashboard's tag discipline.
///
/// The REPL is sequential, so the at-most-one-in-flight rule holds by
/// construction; the tag check still guards the cache against a snapshot
/// that changed between request and completion.
async fn run_analysis(config: &PulseConfig, dashboard: &mut Dashboard) -> Result<(), PulseError> {
    let client = GeminiClient::from_config(&config.gemini)?;

    let Some(tag) = dashboard.try_begin_analysis() else {
        println!("{}", "an analysis is already in progress".yellow());
        return Ok(());
    };

    println!("{}", "analyzing feedback...".dimmed());
    match client.analyze(dashboard.entries()).await {
        Ok(result) => {
            if dashboard.complete_analysis(tag, result) {
                // Render from the cache: what the user sees is exactly the
                // analysis held for the current revision.
                if let Some(analysis) = dashboard.current_analysis() {
                    print_analysis(analysis);
                }
            } else {
                println!("{}", "feedback changed during analysis; run again".yellow());
            }
            Ok(())
        }
        Err(e) => {
            dashboard.fail_analysis(tag);
            Err(e)
        }
    }
}

/// Render an error with a per-kind, user-actionable message.
pub fn render_error(error: &PulseError) {
    match error {
        PulseError::Validation(msg) => eprintln!("{}: {msg}", "invalid input".red()),
        PulseError::NoData => {
            eprintln!("{}: submit some feedback first", "no data to analyze".yellow());
        }
        PulseError::Config(msg) => eprintln!("{}: {msg}", "check your configuration".red()),
        PulseError::Provider { message, .. } => {
            eprintln!("{}: {message}", "service unavailable, try again".red());
        }
        PulseError::AnalysisFormat { message, raw } => {
            eprintln!("{}: {message}", "unexpected response format".red());
            debug!(raw = %raw, "raw analysis payload");
        }
        other => eprintln!("{}: {other}", "error".red()),
    }
}
