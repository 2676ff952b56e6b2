use serde::Deserialize;

use crate::error::Result;

/// History settings, read once when the manager is constructed.
///
/// ```toml
/// [history]
/// max-count = 50
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HistoryConfig {
	/// Maximum entries kept per history source. Zero disables recording.
	pub max_count: usize,
}

impl HistoryConfig {
	pub const DEFAULT_MAX_COUNT: usize = 100;

	pub fn new(max_count: usize) -> Self {
		Self { max_count }
	}

	/// Parses the `[history]` table of a TOML document.
	///
	/// A missing table or key falls back to the defaults.
	pub fn from_toml(src: &str) -> Result<Self> {
		#[derive(Deserialize)]
		struct Root {
			#[serde(default)]
			history: HistoryConfig,
		}

		let root: Root = toml::from_str(src)?;
		Ok(root.history)
	}

	/// Returns `true` if visits should be recorded at all.
	pub fn is_enabled(&self) -> bool {
		self.max_count > 0
	}
}

impl Default for HistoryConfig {
	fn default() -> Self {
		Self {
			max_count: Self::DEFAULT_MAX_COUNT,
		}
	}
}
