// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feedback and analysis data model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::PulseError;

/// Lowest valid mood rating (most negative).
pub const MOOD_MIN: u8 = 1;
/// Highest valid mood rating (most positive).
pub const MOOD_MAX: u8 = 5;

/// One anonymous feedback submission.
///
/// All fields are immutable after creation. Entries only exist fully
/// constructed: [`FeedbackEntry::new`] validates its input, and the blob
/// serialization round-trips the exact same four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Unique entry identifier (UUID v4).
    pub id: String,
    /// Free-text comment, never blank.
    pub text: String,
    /// Ordinal mood rating, 1 (most negative) to 5 (most positive).
    pub mood: u8,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
}

impl FeedbackEntry {
    /// Creates a validated entry with a fresh id and the current timestamp.
    ///
    /// Rejects blank/whitespace-only text and moods outside 1..=5.
    pub fn new(text: &str, mood: u8) -> Result<Self, PulseError> {
        if text.trim().is_empty() {
            return Err(PulseError::Validation(
                "feedback text must not be empty".to_string(),
            ));
        }
        if !(MOOD_MIN..=MOOD_MAX).contains(&mood) {
            return Err(PulseError::Validation(format!(
                "mood must be between {MOOD_MIN} and {MOOD_MAX}, got {mood}"
            )));
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            mood,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }
}

/// Human-readable label for a mood rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Mood {
    Angry,
    Sad,
    Neutral,
    Happy,
    Ecstatic,
}

impl Mood {
    /// Maps a rating in 1..=5 to its label; `None` outside the scale.
    pub fn from_rating(mood: u8) -> Option<Self> {
        match mood {
            1 => Some(Mood::Angry),
            2 => Some(Mood::Sad),
            3 => Some(Mood::Neutral),
            4 => Some(Mood::Happy),
            5 => Some(Mood::Ecstatic),
            _ => None,
        }
    }
}

/// Structured analysis produced by the text-generation provider.
///
/// Derived state only: never persisted across sessions, and invalidated by
/// any mutation to the feedback collection (the caller enforces this via a
/// revision tag, see the `pulse` dashboard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One-sentence summary of the overall sentiment.
    pub summary: String,
    /// Exactly three actionable recommendations.
    #[serde(rename = "actionPoints")]
    pub action_points: Vec<String>,
}
