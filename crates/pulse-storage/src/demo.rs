// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned demo feedback for an empty dashboard.

use pulse_core::FeedbackEntry;

/// The seven demo submissions, with fresh ids and current timestamps.
///
/// Seeded via [`crate::FeedbackStore::replace_all`] so repeated seeding
/// never duplicates ids.
pub fn demo_entries() -> Vec<FeedbackEntry> {
    [
        ("I feel like our meetings are too long and could be emails.", 2),
        ("Love the new coffee machine! It's a small thing but makes a difference.", 5),
        ("The team spirit is great, but workload is getting heavy.", 3),
        ("I'm struggling with the lack of clear direction on the new project.", 2),
        ("Friday lunches are the best!", 5),
        ("Management is really listening to us lately. Good job.", 4),
        ("The noise in the open office is distracting.", 1),
    ]
    .into_iter()
    .map(|(text, mood)| FeedbackEntry {
        id: uuid::Uuid::new_v4().to_string(),
        text: text.to_string(),
        mood,
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
    .collect()
}
