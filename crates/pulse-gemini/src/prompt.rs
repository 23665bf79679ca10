// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt assembly for analysis requests.

use pulse_core::FeedbackEntry;

/// Build the analysis prompt from a feedback snapshot.
///
/// Deterministic: entries are serialized one per line in collection order,
/// each as `- (Mood: {mood}/5): "{text}"`. Two identical snapshots always
/// produce the same prompt.
pub fn build_prompt(entries: &[FeedbackEntry]) -> String {
    let feedback_lines = entries
        .iter()
        .map(|entry| format!("- (Mood: {}/5): \"{}\"", entry.mood, entry.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert HR consultant and data analyst.\n\
         Analyze the following anonymous employee feedback comments from a \
         company culture survey.\n\
         \n\
         Identify trends, sentiment, and specific pain points or wins.\n\
         \n\
         Based on this analysis, provide:\n\
         1. A one-sentence executive summary of the overall team sentiment.\n\
         2. A concrete, actionable 3-point plan for management to improve or \
         maintain the culture.\n\
         \n\
         Feedback Data:\n\
         {feedback_lines}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, mood: u8) -> FeedbackEntry {
        FeedbackEntry {
            id: text.to_string(),
            text: text.to_string(),
            mood,
            timestamp: 0,
        }
    }

    #[test]
    fn entries_appear_one_per_line_in_collection_order() {
        let prompt = build_prompt(&[entry("meetings too long", 2), entry("great coffee", 5)]);
        let first = prompt.find("- (Mood: 2/5): \"meetings too long\"").unwrap();
        let second = prompt.find("- (Mood: 5/5): \"great coffee\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn prompt_is_deterministic() {
        let entries = vec![entry("a", 1), entry("b", 4)];
        assert_eq!(build_prompt(&entries), build_prompt(&entries));
    }

    #[test]
    fn preamble_asks_for_summary_and_three_point_plan() {
        let prompt = build_prompt(&[entry("x", 3)]);
        assert!(prompt.contains("one-sentence executive summary"));
        assert!(prompt.contains("3-point plan"));
    }
}
