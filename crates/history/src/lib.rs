//! Navigation history for documents across session and notebook scopes.
//!
//! Visits are recorded into independent history sources: one global session
//! store and one store per open notebook. [`HistoryManager`] merges every
//! source into a single recency-ordered view and keeps a bounded stack of
//! recently closed documents for "reopen last closed".
//!
//! # Architecture
//!
//! ```text
//!                         ┌──────────────────────────┐
//!  add / clear ──────────►│ HistoryManager           │──► HistoryUpdates
//!                         │  merged: Vec<EntryFull>  │    (change notification)
//!                         │  closed: RecentClosed    │
//!                         └────┬────────────────┬────┘
//!                              │                │
//!                   HistorySource (session)   NotebookSet ──► Notebook: HistorySource
//! ```
//!
//! The manager never owns the sources. Session and notebook stores belong to
//! their collaborators and only need to honour the [`HistorySource`]
//! upsert-and-trim contract.

/// Recently closed document stack.
pub mod closed;
/// History configuration.
pub mod config;
pub mod entry;
pub mod error;
pub mod manager;
pub mod notebook;
pub mod notify;
pub mod store;

pub use closed::{LastClosedFile, MAX_CLOSED_FILES, RecentClosedStack};
pub use config::HistoryConfig;
pub use entry::{HistoryEntry, HistoryEntryFull, ViewMode};
pub use error::{ConfigError, Result};
pub use manager::{Clock, HistoryManager};
pub use notebook::{Notebook, NotebookBackend, NotebookHandle, NotebookList, NotebookSet};
pub use notify::{HistoryNotifier, HistoryUpdates};
pub use store::{HistorySource, MemoryHistoryStore, insert_history_entry};
