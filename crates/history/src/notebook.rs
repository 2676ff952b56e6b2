//! Notebook collaborator traits.
//!
//! Notebook management lives outside this crate. The history manager only
//! needs to enumerate open notebooks, hear when that set changes, and for
//! each notebook read its history, display name and path resolution.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use crate::store::HistorySource;

/// Shared handle to an open notebook.
pub type NotebookHandle = Arc<dyn Notebook>;

/// Storage backend of a notebook.
pub trait NotebookBackend: Send + Sync {
	/// Resolves a notebook-relative path to an absolute filesystem path.
	fn full_path(&self, relative: &str) -> String;
}

/// An open notebook with its own history scope.
///
/// Entries in a notebook's history store paths relative to the notebook.
pub trait Notebook: HistorySource {
	/// Display name.
	fn name(&self) -> String;

	fn backend(&self) -> &dyn NotebookBackend;
}

/// The set of currently open notebooks.
pub trait NotebookSet: Send + Sync {
	/// Open notebooks in display order.
	fn notebooks(&self) -> Vec<NotebookHandle>;

	/// Change channel raised whenever notebooks are opened or closed.
	fn subscribe(&self) -> watch::Receiver<u64>;
}

/// Simple [`NotebookSet`] holding a list of handles.
///
/// Opening or closing a notebook bumps the change generation.
#[derive(Debug)]
pub struct NotebookList {
	notebooks: RwLock<Vec<NotebookHandle>>,
	tx: watch::Sender<u64>,
}

impl Default for NotebookList {
	fn default() -> Self {
		Self::new()
	}
}

impl NotebookList {
	pub fn new() -> Self {
		let (tx, _) = watch::channel(0);
		Self {
			notebooks: RwLock::new(Vec::new()),
			tx,
		}
	}

	/// Adds a notebook, replacing any open notebook with the same name.
	pub fn open(&self, notebook: NotebookHandle) {
		let name = notebook.name();
		{
			let mut notebooks = self.notebooks.write();
			notebooks.retain(|nb| nb.name() != name);
			notebooks.push(notebook);
		}
		debug!(notebook = %name, "notebooks.open");
		self.bump();
	}

	/// Closes the notebook named `name`. Returns `false` if it was not open.
	pub fn close(&self, name: &str) -> bool {
		let removed = {
			let mut notebooks = self.notebooks.write();
			let before = notebooks.len();
			notebooks.retain(|nb| nb.name() != name);
			notebooks.len() != before
		};
		if removed {
			debug!(notebook = %name, "notebooks.close");
			self.bump();
		}
		removed
	}

	/// Finds an open notebook by name.
	pub fn get(&self, name: &str) -> Option<NotebookHandle> {
		self.notebooks.read().iter().find(|nb| nb.name() == name).cloned()
	}

	fn bump(&self) {
		self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
	}
}

impl NotebookSet for NotebookList {
	fn notebooks(&self) -> Vec<NotebookHandle> {
		self.notebooks.read().clone()
	}

	fn subscribe(&self) -> watch::Receiver<u64> {
		self.tx.subscribe()
	}
}

impl std::fmt::Debug for dyn Notebook {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Notebook").field("name", &self.name()).finish_non_exhaustive()
	}
}
