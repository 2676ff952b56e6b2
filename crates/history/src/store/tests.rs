use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use super::{HistorySource, MemoryHistoryStore, insert_history_entry};
use crate::entry::HistoryEntry;

fn at(secs: i64) -> DateTime<Utc> {
	Utc.timestamp_opt(secs, 0).single().expect("valid timestamp")
}

fn entry(path: &str, secs: i64) -> HistoryEntry {
	HistoryEntry::new(path, 0, at(secs))
}

fn paths(history: &[HistoryEntry]) -> Vec<&str> {
	history.iter().map(|e| e.path.as_str()).collect()
}

#[test]
fn upsert_moves_existing_path_to_back() {
	let mut history = vec![entry("a", 1), entry("b", 2), entry("c", 3)];
	let updated = HistoryEntry::new("a", 42, at(4));

	insert_history_entry(&mut history, updated.clone(), 10);

	assert_eq!(paths(&history), ["b", "c", "a"]);
	assert_eq!(history.last(), Some(&updated));
}

#[test]
fn trim_drops_oldest_from_front() {
	let store = MemoryHistoryStore::new(3);
	for (i, path) in ["a", "b", "c", "d"].into_iter().enumerate() {
		store.add_history(entry(path, i as i64));
	}

	assert_eq!(paths(&store.history()), ["b", "c", "d"]);
	assert_eq!(store.len(), 3);
}

#[test]
fn re_adding_within_capacity_does_not_evict() {
	let store = MemoryHistoryStore::new(2);
	store.add_history(entry("a", 1));
	store.add_history(entry("b", 2));
	store.add_history(entry("a", 3));

	assert_eq!(paths(&store.history()), ["b", "a"]);
}

#[test]
fn clear_empties_store() {
	let store = MemoryHistoryStore::new(5);
	store.add_history(entry("a", 1));
	store.clear_history();

	assert!(store.is_empty());
	assert!(store.history().is_empty());
}

#[test]
fn seeding_collapses_duplicates_and_trims() {
	let store = MemoryHistoryStore::with_entries(
		2,
		[entry("a", 1), entry("b", 2), entry("a", 3), entry("c", 4)],
	);

	assert_eq!(store.max_count(), 2);
	assert_eq!(paths(&store.history()), ["a", "c"]);
}

#[test]
fn zero_capacity_keeps_nothing() {
	let store = MemoryHistoryStore::new(0);
	store.add_history(entry("a", 1));
	assert!(store.is_empty());
}

proptest! {
	/// After any sequence of inserts, the store holds at most `max` entries and
	/// each path at most once.
	#[test]
	fn prop_bounded_and_unique(max in 1usize..8, ops in prop::collection::vec(0u8..12, 0..64)) {
		let mut history = Vec::new();
		for (i, op) in ops.iter().enumerate() {
			insert_history_entry(&mut history, entry(&format!("p{op}"), i as i64), max);
			prop_assert!(history.len() <= max);
		}

		let mut seen: Vec<_> = paths(&history);
		seen.sort_unstable();
		seen.dedup();
		prop_assert_eq!(seen.len(), history.len());
	}

	/// The store always equals the `max` most recently touched distinct paths,
	/// in touch order.
	#[test]
	fn prop_keeps_most_recent_distinct(max in 1usize..8, ops in prop::collection::vec(0u8..12, 0..64)) {
		let mut history = Vec::new();
		for (i, op) in ops.iter().enumerate() {
			insert_history_entry(&mut history, entry(&format!("p{op}"), i as i64), max);
		}

		let mut expected: Vec<String> = Vec::new();
		for op in ops.iter().rev() {
			let path = format!("p{op}");
			if !expected.contains(&path) {
				expected.push(path);
			}
		}
		expected.truncate(max);
		expected.reverse();

		let actual: Vec<String> = history.iter().map(|e| e.path.clone()).collect();
		prop_assert_eq!(actual, expected);
	}
}
