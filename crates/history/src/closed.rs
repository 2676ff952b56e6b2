use std::collections::VecDeque;

use crate::entry::ViewMode;

/// Maximum number of closed files to remember.
pub const MAX_CLOSED_FILES: usize = 100;

/// A document that was closed and can be reopened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastClosedFile {
	pub path: String,
	pub line_number: i32,
	pub mode: ViewMode,
	pub read_only: bool,
}

/// Recently closed documents, most recent at the back.
///
/// Behaves as a LIFO for [`pop`] but as a sliding window once full: pushing
/// past [`MAX_CLOSED_FILES`] silently drops the oldest entry. Independent of
/// persisted history.
///
/// [`pop`]: RecentClosedStack::pop
#[derive(Debug, Default)]
pub struct RecentClosedStack {
	files: VecDeque<LastClosedFile>,
}

impl RecentClosedStack {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a closed file.
	///
	/// A previous record for the same path is removed so the path appears
	/// once, at the top.
	pub fn push(&mut self, file: LastClosedFile) {
		if let Some(idx) = self.files.iter().rposition(|f| f.path == file.path) {
			self.files.remove(idx);
		}

		self.files.push_back(file);

		while self.files.len() > MAX_CLOSED_FILES {
			self.files.pop_front();
		}
	}

	/// Removes and returns the most recently closed file.
	pub fn pop(&mut self) -> Option<LastClosedFile> {
		self.files.pop_back()
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	/// Iterates from the most recently closed file to the oldest.
	pub fn iter(&self) -> impl Iterator<Item = &LastClosedFile> {
		self.files.iter().rev()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn closed(path: &str) -> LastClosedFile {
		LastClosedFile {
			path: path.to_string(),
			..Default::default()
		}
	}

	#[test]
	fn pop_on_empty_returns_none() {
		let mut stack = RecentClosedStack::new();
		assert_eq!(stack.pop(), None);
	}

	#[test]
	fn pops_in_reverse_push_order() {
		let mut stack = RecentClosedStack::new();
		for path in ["a", "b", "c"] {
			stack.push(closed(path));
		}

		assert_eq!(stack.pop().map(|f| f.path), Some("c".into()));
		assert_eq!(stack.pop().map(|f| f.path), Some("b".into()));
		assert_eq!(stack.pop().map(|f| f.path), Some("a".into()));
		assert!(stack.is_empty());
	}

	#[test]
	fn repushed_path_moves_to_top() {
		let mut stack = RecentClosedStack::new();
		stack.push(closed("a"));
		stack.push(closed("b"));
		stack.push(LastClosedFile {
			path: "a".into(),
			line_number: 12,
			mode: ViewMode::Edit,
			read_only: true,
		});

		assert_eq!(stack.len(), 2);
		let top = stack.pop().expect("top");
		assert_eq!(top.line_number, 12);
		assert_eq!(top.mode, ViewMode::Edit);
		assert!(top.read_only);
		assert_eq!(stack.pop().map(|f| f.path), Some("b".into()));
	}

	#[test]
	fn overflow_drops_oldest() {
		let mut stack = RecentClosedStack::new();
		for i in 0..MAX_CLOSED_FILES + 5 {
			stack.push(closed(&format!("f{i}")));
		}

		assert_eq!(stack.len(), MAX_CLOSED_FILES);
		assert_eq!(stack.iter().last().map(|f| f.path.as_str()), Some("f5"));
		assert_eq!(
			stack.iter().next().map(|f| f.path.as_str()),
			Some(format!("f{}", MAX_CLOSED_FILES + 4).as_str())
		);
	}
}
