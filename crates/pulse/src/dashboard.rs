// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory dashboard session state.
//!
//! Owns the caller side of the analysis contract: a cached
//! [`AnalysisResult`] is only valid for the collection revision it was
//! requested against. Every mutation bumps the revision and drops the
//! cache, and a completion whose tag no longer matches is discarded as
//! stale rather than overwriting fresher state.

use pulse_core::{AnalysisResult, FeedbackEntry};

/// Lifecycle of the current analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    /// No request outstanding and no failure to report.
    Idle,
    /// A request is in flight; a second one must not be issued.
    Requesting,
    /// The cached analysis is current.
    Succeeded,
    /// The last request failed; re-invoking is a fresh request.
    Failed,
}

#[derive(Debug, Clone)]
struct CachedAnalysis {
    result: AnalysisResult,
    revision: u64,
}

/// Dashboard session: collection snapshot, revision tag, analysis cache.
#[derive(Debug)]
pub struct Dashboard {
    entries: Vec<FeedbackEntry>,
    revision: u64,
    analysis: Option<CachedAnalysis>,
    state: AnalysisState,
}

impl Dashboard {
    /// Create a session over a loaded collection snapshot.
    pub fn new(entries: Vec<FeedbackEntry>) -> Self {
        Self {
            entries,
            revision: 0,
            analysis: None,
            state: AnalysisState::Idle,
        }
    }

    /// Current collection snapshot.
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    /// Current collection revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current analysis lifecycle state.
    pub fn state(&self) -> AnalysisState {
        self.state
    }

    /// Adopt a mutated collection (add, bulk-replace, clear).
    ///
    /// Bumps the revision and invalidates any cached analysis: the UI must
    /// never show a stale analysis as current.
    pub fn apply_mutation(&mut self, entries: Vec<FeedbackEntry>) {
        self.entries = entries;
        self.revision += 1;
        self.analysis = None;
        if self.state != AnalysisState::Requesting {
            self.state = AnalysisState::Idle;
        }
    }

    /// Mark a request as started, returning the revision tag to complete
    /// it with. `None` while another request is outstanding.
    pub fn try_begin_analysis(&mut self) -> Option<u64> {
        if self.state == AnalysisState::Requesting {
            return None;
        }
        self.state = AnalysisState::Requesting;
        Some(self.revision)
    }

    /// Store a completed analysis if its tag is still current.
    ///
    /// Returns `false` (and keeps the cache empty) when the collection
    /// changed while the request was in flight.
    pub fn complete_analysis(&mut self, tag: u64, result: AnalysisResult) -> bool {
        if tag != self.revision {
            self.state = AnalysisState::Idle;
            return false;
        }
        self.analysis = Some(CachedAnalysis {
            result,
            revision: tag,
        });
        self.state = AnalysisState::Succeeded;
        true
    }

    /// Record a failed request. A stale failure resets to idle instead.
    pub fn fail_analysis(&mut self, tag: u64) {
        self.state = if tag == self.revision {
            AnalysisState::Failed
        } else {
            AnalysisState::Idle
        };
    }

    /// The cached analysis, if one is current for this revision.
    pub fn current_analysis(&self) -> Option<&AnalysisResult> {
        self.analysis
            .as_ref()
            .filter(|cached| cached.revision == self.revision)
            .map(|cached| &cached.result)
    }
}
