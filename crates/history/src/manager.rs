//! Merged navigation history.
//!
//! [`HistoryManager`] combines the session history and the history of every
//! open notebook into one view ordered by `(last_accessed_utc, path)`, and
//! tracks recently closed documents for "reopen last closed".
//!
//! # Update paths
//!
//! * [`load_history`]: full rebuild from all sources. Runs at construction,
//!   after [`clear`], and when the notebook set changes.
//! * [`add`]: incremental. Writes to the owning source, then patches the
//!   merged view in place so it matches what a rebuild would produce.
//!
//! Both paths raise exactly one change notification after all state is
//! updated.
//!
//! [`load_history`]: HistoryManager::load_history
//! [`clear`]: HistoryManager::clear
//! [`add`]: HistoryManager::add

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::closed::{LastClosedFile, RecentClosedStack};
use crate::config::HistoryConfig;
use crate::entry::{HistoryEntry, HistoryEntryFull, ViewMode};
use crate::notebook::{Notebook, NotebookSet};
use crate::notify::{HistoryNotifier, HistoryUpdates};
use crate::store::HistorySource;

/// Source of "now" for new entries.
pub type Clock = fn() -> DateTime<Utc>;

/// Orchestrates the merged history view and the closed-file stack.
///
/// The manager reads from but never owns the session store and notebooks.
/// Merged entries capture notebook names and resolved paths by value, so a
/// notebook may be closed while its entries are still displayed.
pub struct HistoryManager {
	config: HistoryConfig,
	session: Arc<dyn HistorySource>,
	notebooks: Arc<dyn NotebookSet>,
	notebook_changes: watch::Receiver<u64>,
	/// Sorted merged view.
	history: Vec<HistoryEntryFull>,
	closed: RecentClosedStack,
	notifier: HistoryNotifier,
	clock: Clock,
}

impl HistoryManager {
	/// Creates a manager and performs the initial [`load_history`].
	///
	/// `config` is read once here and stays fixed for the manager's lifetime.
	/// Stores enforce their own bound, so the session store and every
	/// notebook store must be built from the same `config.max_count` (see
	/// [`MemoryHistoryStore::from_config`]).
	///
	/// [`MemoryHistoryStore::from_config`]: crate::store::MemoryHistoryStore::from_config
	/// [`load_history`]: Self::load_history
	pub fn new(
		config: HistoryConfig,
		session: Arc<dyn HistorySource>,
		notebooks: Arc<dyn NotebookSet>,
	) -> Self {
		let notebook_changes = notebooks.subscribe();
		let mut manager = Self {
			config,
			session,
			notebooks,
			notebook_changes,
			history: Vec::new(),
			closed: RecentClosedStack::new(),
			notifier: HistoryNotifier::new(),
			clock: Utc::now,
		};
		manager.load_history();
		manager
	}

	/// Replaces the time source used to stamp new entries.
	pub fn with_clock(mut self, clock: Clock) -> Self {
		self.clock = clock;
		self
	}

	/// Rebuilds the merged view from every source.
	///
	/// Session entries are taken as stored. Notebook entries have their path
	/// resolved through the notebook backend and are tagged with the
	/// notebook's name.
	pub fn load_history(&mut self) {
		self.history.clear();
		self.history
			.extend(self.session.history().into_iter().map(HistoryEntryFull::session));

		for notebook in self.notebooks.notebooks() {
			let name = notebook.name();
			let backend = notebook.backend();
			self.history.extend(notebook.history().into_iter().map(|mut entry| {
				entry.path = backend.full_path(&entry.path);
				HistoryEntryFull::notebook(entry, name.clone())
			}));
		}

		self.history.sort();

		debug!(count = self.history.len(), "history.load");
		self.notifier.notify();
	}

	/// Returns the merged view, oldest first.
	pub fn history(&self) -> &[HistoryEntryFull] {
		&self.history
	}

	/// Records a visit to `path`.
	///
	/// The entry goes to `notebook`'s history, or to the session history when
	/// no notebook owns the document. The document is also pushed onto the
	/// closed-file stack under its resolved path, so records from different
	/// notebooks never collide. Does nothing if `path` is empty or recording
	/// is disabled by a zero maximum.
	///
	/// A notebook that is not part of the open notebook set still records
	/// the visit, but stays out of the merged view until it is opened.
	pub fn add(
		&mut self,
		path: &str,
		line_number: i32,
		mode: ViewMode,
		read_only: bool,
		notebook: Option<&dyn Notebook>,
	) {
		if path.is_empty() || !self.config.is_enabled() {
			trace!(path, "history.add.skip");
			return;
		}

		let entry = HistoryEntry::new(path, line_number, (self.clock)());

		let (full, live, closed_path) = match notebook {
			Some(notebook) => {
				notebook.add_history(entry.clone());
				let backend = notebook.backend();
				let live: HashSet<String> = notebook
					.history()
					.iter()
					.map(|e| backend.full_path(&e.path))
					.collect();
				let resolved = HistoryEntry {
					path: backend.full_path(path),
					..entry
				};
				let closed_path = resolved.path.clone();
				let full = HistoryEntryFull::notebook(resolved, notebook.name());
				let full = self.is_open(notebook).then_some(full);
				(full, live, closed_path)
			}
			None => {
				self.session.add_history(entry.clone());
				let live = self.session.history().into_iter().map(|e| e.path).collect();
				(Some(HistoryEntryFull::session(entry)), live, path.to_string())
			}
		};

		if let Some(full) = full {
			self.insert_merged(full, &live);
		}

		self.closed.push(LastClosedFile {
			path: closed_path,
			line_number,
			mode,
			read_only,
		});

		trace!(
			path,
			line_number,
			notebook = ?notebook.map(|nb| nb.name()),
			merged = self.history.len(),
			closed = self.closed.len(),
			"history.add"
		);
		self.notifier.notify();
	}

	/// Clears the session history and every open notebook's history, then
	/// rebuilds the (now empty) merged view.
	///
	/// The closed-file stack is left untouched.
	pub fn clear(&mut self) {
		self.session.clear_history();
		for notebook in self.notebooks.notebooks() {
			notebook.clear_history();
		}
		debug!("history.clear");
		self.load_history();
	}

	/// Removes and returns the most recently closed file, or `None` if there
	/// is nothing to reopen.
	pub fn pop_last_closed_file(&mut self) -> Option<LastClosedFile> {
		self.closed.pop()
	}

	/// Closed files from most to least recent.
	pub fn last_closed_files(&self) -> impl Iterator<Item = &LastClosedFile> {
		self.closed.iter()
	}

	/// Reloads if the notebook set changed since the last poll.
	///
	/// Returns `true` if a reload happened. Called from the UI loop.
	pub fn poll_notebook_changes(&mut self) -> bool {
		match self.notebook_changes.has_changed() {
			Ok(true) => {
				self.notebook_changes.mark_unchanged();
				debug!("history.notebooks_changed");
				self.load_history();
				true
			}
			_ => false,
		}
	}

	/// Registers an observer of the "history updated" notification.
	pub fn subscribe(&self) -> HistoryUpdates {
		self.notifier.subscribe()
	}

	pub fn max_history_count(&self) -> usize {
		self.config.max_count
	}

	fn is_open(&self, notebook: &dyn Notebook) -> bool {
		let name = notebook.name();
		self.notebooks.notebooks().iter().any(|nb| nb.name() == name)
	}

	/// Patches the merged view with a freshly added entry.
	///
	/// Drops the previous entry for the same scope and path, drops entries of
	/// that scope the source has since evicted (`live` holds the scope's
	/// current paths), and inserts `full` at its sorted position.
	fn insert_merged(&mut self, full: HistoryEntryFull, live: &HashSet<String>) {
		let scope = full.notebook_name.clone();
		self.history.retain(|e| {
			e.notebook_name != scope || (e.entry.path != full.entry.path && live.contains(&e.entry.path))
		});

		let idx = self.history.partition_point(|e| e < &full);
		self.history.insert(idx, full);
	}
}
