//! History source contract.
//!
//! Every scope that records visits (the session and each notebook) exposes
//! the same three operations through [`HistorySource`]. Recency is modelled
//! only by position: an updated entry migrates to the back, and capacity
//! enforcement always evicts from the front.

use parking_lot::RwLock;
use tracing::trace;

use crate::config::HistoryConfig;
use crate::entry::HistoryEntry;

/// A persisted, capacity-bounded sequence of [`HistoryEntry`].
///
/// Implementations own their storage and persistence. They must always
/// return a valid (possibly empty) sequence and apply
/// [`insert_history_entry`] semantics on [`add_history`].
///
/// [`add_history`]: HistorySource::add_history
pub trait HistorySource: Send + Sync {
	/// Returns the current contents, oldest position first.
	fn history(&self) -> Vec<HistoryEntry>;

	/// Upserts `entry` and trims the source to its maximum.
	fn add_history(&self, entry: HistoryEntry);

	/// Removes every entry.
	fn clear_history(&self);
}

/// Upserts `entry` into `history`, keeping at most `max_count` entries.
///
/// An existing entry with the same path is removed first and the new entry
/// is appended, so the most recently touched item is always last. Entries
/// beyond `max_count` are dropped from the front.
pub fn insert_history_entry(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, max_count: usize) {
	if let Some(idx) = history.iter().rposition(|e| e.path == entry.path) {
		history.remove(idx);
	}

	history.push(entry);

	if history.len() > max_count {
		let excess = history.len() - max_count;
		trace!(excess, max_count, "history.trim");
		history.drain(..excess);
	}
}

/// In-memory [`HistorySource`].
///
/// Serves as the session store and as the store behind notebooks that keep
/// their history in memory and persist it elsewhere.
#[derive(Debug)]
pub struct MemoryHistoryStore {
	entries: RwLock<Vec<HistoryEntry>>,
	max_count: usize,
}

impl MemoryHistoryStore {
	/// Creates an empty store bounded to `max_count` entries.
	pub fn new(max_count: usize) -> Self {
		Self {
			entries: RwLock::new(Vec::new()),
			max_count,
		}
	}

	/// Creates an empty store bounded by the configured history maximum.
	pub fn from_config(config: &HistoryConfig) -> Self {
		Self::new(config.max_count)
	}

	/// Creates a store seeded with previously persisted entries.
	///
	/// Seeding goes through the same upsert-and-trim path as
	/// [`HistorySource::add_history`], so duplicate paths collapse to their
	/// last occurrence and the oldest overflow is discarded.
	pub fn with_entries(max_count: usize, entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
		let mut history = Vec::new();
		for entry in entries {
			insert_history_entry(&mut history, entry, max_count);
		}
		Self {
			entries: RwLock::new(history),
			max_count,
		}
	}

	pub fn max_count(&self) -> usize {
		self.max_count
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}

impl HistorySource for MemoryHistoryStore {
	fn history(&self) -> Vec<HistoryEntry> {
		self.entries.read().clone()
	}

	fn add_history(&self, entry: HistoryEntry) {
		insert_history_entry(&mut self.entries.write(), entry, self.max_count);
	}

	fn clear_history(&self) {
		self.entries.write().clear();
	}
}

#[cfg(test)]
mod tests;
