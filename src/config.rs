//! Boundary normalization of the rule's configuration.
//!
//! Hosts have handed this rule two option shapes over time: a plain options
//! object with an `importOrder` field, and a `[severity, options]` pair. Both
//! are normalized here, once, into [`RuleOptions`]; nothing past this module
//! branches on shape.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
	import_order: Option<Vec<Value>>,
}

/// Import grouping policy, normalized from the host's raw options value.
#[derive(Debug, Default)]
pub struct RuleOptions {
	grouping: Grouping,
}

#[derive(Debug, Default)]
enum Grouping {
	/// Two groups: external/absolute (0) and relative (1).
	#[default]
	Default,
	/// Ordered patterns; a path belongs to the first matching pattern's
	/// index. Unusable entries keep their slot but never match.
	Patterns(Vec<Option<Regex>>),
}

impl RuleOptions {
	/// Normalizes the host's raw options value.
	///
	/// Accepts an options object, a `[severity, options]` array, or nothing.
	/// Anything that does not carry a usable `importOrder` list activates the
	/// default two-group classification.
	pub fn from_value(value: Option<&Value>) -> Self {
		let options = match value {
			Some(Value::Array(elements)) => elements.get(1),
			other => other,
		};
		let Some(options) = options else {
			return Self::default();
		};
		let Ok(raw) = serde_json::from_value::<RawOptions>(options.clone()) else {
			return Self::default();
		};
		let Some(patterns) = raw.import_order else {
			return Self::default();
		};

		if patterns.is_empty() {
			return Self::default();
		}

		Self::from_patterns(patterns.iter().map(|pattern| pattern.as_str().map(ToOwned::to_owned)))
	}

	/// Builds the policy from an ordered pattern list directly.
	///
	/// `None` entries (and entries that fail to compile) occupy their index
	/// but never match, so configured group numbers stay stable across a
	/// misconfigured pattern.
	pub fn from_patterns(patterns: impl IntoIterator<Item = Option<String>>) -> Self {
		let matchers = patterns
			.into_iter()
			.map(|pattern| pattern.and_then(|pattern| Regex::new(&pattern).ok()))
			.collect::<Vec<_>>();

		if matchers.is_empty() {
			Self::default()
		} else {
			Self { grouping: Grouping::Patterns(matchers) }
		}
	}

	/// The group index of `path` under this policy.
	///
	/// Total for any string input: with patterns configured, the first match
	/// wins and non-matching paths fall into an implicit catch-all last
	/// group; without patterns, relative paths (leading `.`) are group 1 and
	/// everything else group 0.
	pub fn group_index(&self, path: &str) -> usize {
		match &self.grouping {
			Grouping::Default => usize::from(path.starts_with('.')),
			Grouping::Patterns(matchers) => matchers
				.iter()
				.position(|matcher| {
					matcher.as_ref().is_some_and(|matcher| matcher.is_match(path))
				})
				.unwrap_or(matchers.len()),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn default_grouping_splits_relative_from_external() {
		let options = RuleOptions::default();

		assert_eq!(options.group_index(".."), 1);
		assert_eq!(options.group_index("./a.sol"), 1);
		assert_eq!(options.group_index("lib"), 0);
		assert_eq!(options.group_index("@scope/a.sol"), 0);
	}

	#[test]
	fn first_matching_pattern_wins_and_non_matches_go_last() {
		let options = RuleOptions::from_patterns(
			["^@openzeppelin", r"^\."].map(|pattern| Some(pattern.to_owned())),
		);

		assert_eq!(options.group_index("@openzeppelin/x"), 0);
		assert_eq!(options.group_index("./x"), 1);
		assert_eq!(options.group_index("lib"), 2);
	}

	#[test]
	fn invalid_pattern_keeps_its_index_but_never_matches() {
		let options = RuleOptions::from_patterns(
			["(unclosed", r"^\."].map(|pattern| Some(pattern.to_owned())),
		);

		assert_eq!(options.group_index("./x"), 1);
		assert_eq!(options.group_index("(unclosed"), 2);
	}

	#[test]
	fn severity_pair_shape_is_accepted() {
		let value = json!(["error", { "importOrder": ["^@scope", "^\\."] }]);
		let options = RuleOptions::from_value(Some(&value));

		assert_eq!(options.group_index("@scope/a.sol"), 0);
		assert_eq!(options.group_index("./a.sol"), 1);
		assert_eq!(options.group_index("lib.sol"), 2);
	}

	#[test]
	fn non_string_pattern_entries_are_skipped_but_counted() {
		let value = json!({ "importOrder": [7, "^\\."] });
		let options = RuleOptions::from_value(Some(&value));

		assert_eq!(options.group_index("./a.sol"), 1);
		assert_eq!(options.group_index("lib.sol"), 2);
	}

	#[test]
	fn unusable_options_fall_back_to_default_grouping() {
		for value in [json!(null), json!("error"), json!({}), json!({ "importOrder": [] })] {
			let options = RuleOptions::from_value(Some(&value));

			assert_eq!(options.group_index("lib.sol"), 0);
			assert_eq!(options.group_index("./a.sol"), 1);
		}

		let options = RuleOptions::from_value(None);

		assert_eq!(options.group_index("lib.sol"), 0);
	}

	#[test]
	fn group_index_is_deterministic() {
		let options = RuleOptions::from_patterns([Some("^@".to_owned())]);

		for _ in 0..3 {
			assert_eq!(options.group_index("@scope/a.sol"), 0);
			assert_eq!(options.group_index("lib.sol"), 1);
		}
	}
}
