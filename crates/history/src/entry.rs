//! History entry types.
//!
//! * [`HistoryEntry`]: one visit record as stored by a history source.
//! * [`HistoryEntryFull`]: merged-view projection that remembers which
//!   notebook (if any) the entry came from.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a document was being viewed when it was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
	/// Rendered, non-editing view.
	#[default]
	Read,
	/// Source editing view.
	Edit,
}

/// A single visit record.
///
/// `path` is only unique within one history source. The same relative path
/// may exist in the session scope and in a notebook scope as distinct items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
	/// Document path as stored by the owning source.
	pub path: String,
	/// Cursor line at the last visit, or [`HistoryEntry::UNKNOWN_LINE`].
	pub line_number: i32,
	/// Time of the last visit. Primary sort key of the merged view.
	pub last_accessed_utc: DateTime<Utc>,
}

impl HistoryEntry {
	/// Sentinel for an unknown cursor line.
	pub const UNKNOWN_LINE: i32 = -1;

	/// Creates an entry stamped with `last_accessed_utc`.
	pub fn new(path: impl Into<String>, line_number: i32, last_accessed_utc: DateTime<Utc>) -> Self {
		Self {
			path: path.into(),
			line_number,
			last_accessed_utc,
		}
	}
}

/// Merged-view entry annotated with its originating scope.
///
/// Notebook-owned entries carry the notebook's display name and a path that
/// was resolved through the notebook backend when the entry was built. The
/// name is captured by value; the notebook may be closed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntryFull {
	pub entry: HistoryEntry,
	/// Owning notebook name, `None` for the session scope.
	pub notebook_name: Option<String>,
}

impl HistoryEntryFull {
	/// Wraps a session-scope entry.
	pub fn session(entry: HistoryEntry) -> Self {
		Self {
			entry,
			notebook_name: None,
		}
	}

	/// Wraps a notebook-scope entry whose path is already resolved.
	pub fn notebook(entry: HistoryEntry, notebook_name: impl Into<String>) -> Self {
		Self {
			entry,
			notebook_name: Some(notebook_name.into()),
		}
	}

	pub fn path(&self) -> &str {
		&self.entry.path
	}

	pub fn is_session(&self) -> bool {
		self.notebook_name.is_none()
	}

	/// Returns `true` if both entries belong to the same scope and path.
	pub fn same_item(&self, other: &Self) -> bool {
		self.notebook_name == other.notebook_name && self.entry.path == other.entry.path
	}
}

impl Ord for HistoryEntryFull {
	/// Orders by `(last_accessed_utc, path)`. The remaining fields only break
	/// ties so that the order stays consistent with `Eq`.
	fn cmp(&self, other: &Self) -> Ordering {
		self.entry
			.last_accessed_utc
			.cmp(&other.entry.last_accessed_utc)
			.then_with(|| self.entry.path.cmp(&other.entry.path))
			.then_with(|| self.notebook_name.cmp(&other.notebook_name))
			.then_with(|| self.entry.line_number.cmp(&other.entry.line_number))
	}
}

impl PartialOrd for HistoryEntryFull {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
