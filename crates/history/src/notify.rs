//! Payload-free "history updated" notification.
//!
//! Backed by a [`watch`] generation counter so it can be raised and polled
//! synchronously from the UI thread without a runtime. Observers re-query
//! [`HistoryManager::history`] after seeing a change.
//!
//! [`HistoryManager::history`]: crate::HistoryManager::history

use tokio::sync::watch;

/// Sending half, owned by the history manager.
#[derive(Debug)]
pub struct HistoryNotifier {
	tx: watch::Sender<u64>,
}

impl Default for HistoryNotifier {
	fn default() -> Self {
		Self::new()
	}
}

impl HistoryNotifier {
	pub fn new() -> Self {
		let (tx, _) = watch::channel(0);
		Self { tx }
	}

	/// Signals one update. Never fails, even with no observers.
	pub fn notify(&self) {
		self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
	}

	/// Registers a new observer. Updates raised before this call are not
	/// reported to it.
	pub fn subscribe(&self) -> HistoryUpdates {
		HistoryUpdates {
			rx: self.tx.subscribe(),
		}
	}

	/// Number of updates raised so far.
	pub fn generation(&self) -> u64 {
		*self.tx.borrow()
	}
}

/// Receiving half handed to observers.
#[derive(Debug, Clone)]
pub struct HistoryUpdates {
	rx: watch::Receiver<u64>,
}

impl HistoryUpdates {
	/// Returns `true` once per batch of updates raised since the last call.
	pub fn take_update(&mut self) -> bool {
		match self.rx.has_changed() {
			Ok(true) => {
				self.rx.mark_unchanged();
				true
			}
			_ => false,
		}
	}

	/// Waits for the next update. Returns `false` if the manager was dropped.
	pub async fn changed(&mut self) -> bool {
		self.rx.changed().await.is_ok()
	}

	/// Generation of the most recent update.
	pub fn generation(&self) -> u64 {
		*self.rx.borrow()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn observer_sees_update_once() {
		let notifier = HistoryNotifier::new();
		let mut updates = notifier.subscribe();
		assert!(!updates.take_update());

		notifier.notify();
		notifier.notify();
		assert!(updates.take_update());
		assert!(!updates.take_update());
		assert_eq!(updates.generation(), 2);
	}

	#[test]
	fn notify_without_observers_still_counts() {
		let notifier = HistoryNotifier::new();
		notifier.notify();
		assert_eq!(notifier.generation(), 1);
	}

	#[tokio::test]
	async fn changed_reports_dropped_manager() {
		let notifier = HistoryNotifier::new();
		let mut updates = notifier.subscribe();
		notifier.notify();
		assert!(updates.changed().await);

		drop(notifier);
		assert!(!updates.changed().await);
	}
}
