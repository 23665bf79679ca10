// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived aggregate statistics over a feedback collection.
//!
//! Pure derivation: no side effects, no stored state. Computed on demand
//! from a read-only snapshot of the collection.

use crate::types::{FeedbackEntry, MOOD_MAX, MOOD_MIN};

/// Aggregate mood statistics for a feedback collection snapshot.
///
/// The exact mean is retained internally; [`MoodMetrics::average_rounded`]
/// (one decimal) is the canonical value the dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodMetrics {
    /// Occurrence count per mood bucket; index 0 holds mood 1.
    per_mood: [u64; 5],
    /// Total number of entries.
    total: u64,
    /// Sum of all mood ratings, for the exact mean.
    mood_sum: u64,
}

impl MoodMetrics {
    /// Computes metrics in a single pass over the collection.
    ///
    /// Order-insensitive, O(n) time, fixed extra space. An empty collection
    /// yields all-zero buckets and an undefined average.
    pub fn compute(entries: &[FeedbackEntry]) -> Self {
        let mut per_mood = [0u64; 5];
        let mut mood_sum = 0u64;
        for entry in entries {
            // Store invariants guarantee mood is in range; guard anyway so a
            // hand-built snapshot cannot index out of bounds.
            if (MOOD_MIN..=MOOD_MAX).contains(&entry.mood) {
                per_mood[(entry.mood - 1) as usize] += 1;
                mood_sum += u64::from(entry.mood);
            }
        }
        Self {
            per_mood,
            total: entries.len() as u64,
            mood_sum,
        }
    }

    /// Occurrence count for a mood rating; 0 for ratings outside 1..=5.
    pub fn count_for(&self, mood: u8) -> u64 {
        if (MOOD_MIN..=MOOD_MAX).contains(&mood) {
            self.per_mood[(mood - 1) as usize]
        } else {
            0
        }
    }

    /// All five buckets in mood order (mood 1 first).
    pub fn buckets(&self) -> [u64; 5] {
        self.per_mood
    }

    /// Total number of entries.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Exact mean mood, or `None` for an empty collection.
    ///
    /// `None` rather than 0: zero would read as maximum-negative sentiment.
    pub fn average(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.mood_sum as f64 / self.total as f64)
        }
    }

    /// Mean mood rounded to one decimal place, the display contract.
    pub fn average_rounded(&self) -> Option<f64> {
        self.average().map(|avg| (avg * 10.0).round() / 10.0)
    }
}
