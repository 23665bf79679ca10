// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot CLI command implementations.
//!
//! Each command opens the store, performs its operation, and prints a
//! result. Persistence happens inside the store before the command
//! returns, so there is no window where a reported success is unwritten.

use colored::Colorize;
use pulse_config::PulseConfig;
use pulse_core::{AnalysisResult, FeedbackEntry, Mood, MoodMetrics, PulseError};
use pulse_gemini::GeminiClient;
use pulse_storage::{demo_entries, FeedbackStore};

/// `pulse submit`: validate and record one feedback entry.
pub async fn submit(config: &PulseConfig, text: &str, mood: u8) -> Result<(), PulseError> {
    let store = FeedbackStore::open(&config.storage).await?;
    let entries = store.load().await;
    let (updated, entry) = store.add(&entries, text, mood).await?;

    let label = Mood::from_rating(entry.mood)
        .map(|m| m.to_string())
        .unwrap_or_default();
    println!(
        "{} mood {} ({label}), {} total",
        "recorded".green(),
        entry.mood,
        updated.len()
    );
    Ok(())
}

/// `pulse list`: print the collection, most recent first.
pub async fn list(config: &PulseConfig) -> Result<(), PulseError> {
    let store = FeedbackStore::open(&config.storage).await?;
    let entries = store.load().await;

    if entries.is_empty() {
        println!("{}", "no feedback yet".dimmed());
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

/// `pulse stats`: print the mood distribution and average.
pub async fn stats(config: &PulseConfig) -> Result<(), PulseError> {
    let store = FeedbackStore::open(&config.storage).await?;
    let entries = store.load().await;
    print_metrics(&MoodMetrics::compute(&entries));
    Ok(())
}

/// `pulse analyze`: request and print a structured analysis.
pub async fn analyze(config: &PulseConfig) -> Result<(), PulseError> {
    let client = GeminiClient::from_config(&config.gemini)?;
    let store = FeedbackStore::open(&config.storage).await?;
    let entries = store.load().await;

    println!("{}", "analyzing feedback...".dimmed());
    let analysis = client.analyze(&entries).await?;
    print_analysis(&analysis);
    Ok(())
}

/// `pulse demo`: replace the collection with the canned demo entries.
pub async fn demo(config: &PulseConfig) -> Result<(), PulseError> {
    let store = FeedbackStore::open(&config.storage).await?;
    let seeded = store.replace_all(demo_entries()).await?;
    println!("{} {} demo entries", "seeded".green(), seeded.len());
    Ok(())
}

/// `pulse clear`: discard all feedback and erase the durable blob.
pub async fn clear(config: &PulseConfig) -> Result<(), PulseError> {
    let store = FeedbackStore::open(&config.storage).await?;
    store.clear().await?;
    println!("{}", "all feedback cleared".yellow());
    Ok(())
}

/// Print one feedback entry with its mood label and date.
pub fn print_entry(entry: &FeedbackEntry) {
    let label = Mood::from_rating(entry.mood)
        .map(|m| m.to_string())
        .unwrap_or_default();
    let date = chrono::DateTime::from_timestamp_millis(entry.timestamp)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    println!(
        "  {} {}  \"{}\"",
        format!("[{}/5 {label}]", entry.mood).cyan(),
        date.dimmed(),
        entry.text
    );
}

/// Print aggregate metrics: per-bucket counts, total, rounded average.
pub fn print_metrics(metrics: &MoodMetrics) {
    println!("{}", "mood distribution".bold());
    for mood in 1..=5u8 {
        let label = Mood::from_rating(mood)
            .map(|m| m.to_string())
            .unwrap_or_default();
        println!("  {mood} ({label:<8}) {}", metrics.count_for(mood));
    }
    println!("  total     {}", metrics.total());
    match metrics.average_rounded() {
        Some(avg) => println!("  avg mood  {avg:.1}"),
        None => println!("  avg mood  {}", "-".dimmed()),
    }
}

/// Print a structured analysis: summary plus the three action points.
pub fn print_analysis(analysis: &AnalysisResult) {
    println!("{} {}", "summary:".bold(), analysis.summary);
    println!("{}", "action plan:".bold());
    for (i, point) in analysis.action_points.iter().enumerate() {
        println!("  {}. {point}", i + 1);
    }
}
