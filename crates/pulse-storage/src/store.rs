// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The feedback store: owner of the canonical feedback collection.
//!
//! The collection is persisted as a JSON array under a single fixed blob
//! key; every mutation rewrites the full blob before returning. Callers
//! hold read-only snapshots (`&[FeedbackEntry]`) and receive a fresh
//! collection back from each mutation.

use pulse_config::model::StorageConfig;
use pulse_core::{FeedbackEntry, PulseError};
use rusqlite::params;
use tracing::{debug, warn};

use crate::database::{map_tr_err, Database};

/// Fixed blob key for the survey dataset.
pub const FEEDBACK_KEY: &str = "culture-survey-data";

/// SQLite-backed feedback store.
///
/// Collection order is most-recent-first: [`FeedbackStore::add`] prepends.
#[derive(Clone)]
pub struct FeedbackStore {
    db: Database,
}

impl FeedbackStore {
    /// Create a store over an opened database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the database named by the storage configuration and wrap it.
    pub async fn open(config: &StorageConfig) -> Result<Self, PulseError> {
        let db = Database::open(&config.database_path).await?;
        Ok(Self::new(db))
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Load the persisted collection.
    ///
    /// Best-effort by contract: a missing key yields an empty collection,
    /// and a corrupt blob is logged and absorbed. Read failures never
    /// surface to the caller.
    pub async fn load(&self) -> Vec<FeedbackEntry> {
        let raw = self
            .db
            .connection()
            .call(|conn| -> Result<Option<String>, rusqlite::Error> {
                let mut stmt = conn.prepare("SELECT value FROM blobs WHERE key = ?1")?;
                let result = stmt.query_row(params![FEEDBACK_KEY], |row| row.get::<_, String>(0));
                match result {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e),
                }
            })
            .await;

        match raw {
            Ok(Some(value)) => match serde_json::from_str::<Vec<FeedbackEntry>>(&value) {
                Ok(entries) => {
                    debug!(count = entries.len(), "feedback collection loaded");
                    entries
                }
                Err(e) => {
                    warn!(error = %e, "stored feedback blob is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read feedback blob, starting empty");
                Vec::new()
            }
        }
    }

    /// Write the full collection to the blob, overwriting prior content.
    ///
    /// Awaited to completion before returning; no mutation is acknowledged
    /// until its write has been applied.
    pub async fn persist(&self, entries: &[FeedbackEntry]) -> Result<(), PulseError> {
        let value = serde_json::to_string(entries).map_err(|e| PulseError::Storage {
            source: Box::new(e),
        })?;
        self.db
            .connection()
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute(
                    "INSERT INTO blobs (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    params![FEEDBACK_KEY, value],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!(count = entries.len(), "feedback collection persisted");
        Ok(())
    }

    /// Validate and prepend a new entry, persisting the updated collection.
    ///
    /// Blank text or a mood outside 1..=5 returns `PulseError::Validation`
    /// without writing anything; the caller's snapshot stays authoritative.
    pub async fn add(
        &self,
        entries: &[FeedbackEntry],
        text: &str,
        mood: u8,
    ) -> Result<(Vec<FeedbackEntry>, FeedbackEntry), PulseError> {
        let entry = FeedbackEntry::new(text, mood)?;

        let mut updated = Vec::with_capacity(entries.len() + 1);
        updated.push(entry.clone());
        updated.extend_from_slice(entries);

        self.persist(&updated).await?;
        Ok((updated, entry))
    }

    /// Replace the whole collection, for bulk seeding.
    pub async fn replace_all(
        &self,
        entries: Vec<FeedbackEntry>,
    ) -> Result<Vec<FeedbackEntry>, PulseError> {
        self.persist(&entries).await?;
        Ok(entries)
    }

    /// Discard all entries and erase the durable blob.
    pub async fn clear(&self) -> Result<Vec<FeedbackEntry>, PulseError> {
        self.db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute("DELETE FROM blobs WHERE key = ?1", params![FEEDBACK_KEY])?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("feedback collection cleared");
        Ok(Vec::new())
    }
}
