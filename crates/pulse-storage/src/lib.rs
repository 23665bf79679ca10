// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Pulse survey application.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and the
//! [`FeedbackStore`] which owns the canonical feedback collection blob.

pub mod database;
pub mod demo;
pub mod migrations;
pub mod store;

pub use database::Database;
pub use demo::demo_entries;
pub use store::FeedbackStore;
