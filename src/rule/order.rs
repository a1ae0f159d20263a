//! Canonical ordering of import entries.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ImportEntry;
use crate::node::SymbolAlias;

const SCOPED_LEVEL: i64 = -40_000;
const HTTP_LEVEL: i64 = -30_000;
const HTTPS_LEVEL: i64 = -20_000;
const FOLDER_LEVEL: i64 = -10_000;

static FOLDER_LEAD_RE: Lazy<Regex> =
	Lazy::new(|| Regex::new("^[a-zA-Z0-9]").expect("Expected operation to succeed."));

/// Rewrites a path that starts with `../` to start with `./` instead.
///
/// Cosmetic only; resolution is unchanged. Idempotent: the rewritten path
/// starts with `./`, which this function leaves alone.
pub(crate) fn normalize_path(path: &str) -> String {
	if path.starts_with("../") { format!("./{path}") } else { path.to_owned() }
}

/// The coarse sort weight of a normalized path.
///
/// Scoped packages first, then protocol imports, then bare folder-style
/// paths. Relative paths rank by how far upward they traverse; deeper `..`
/// chains sort earlier. Anything unrecognized sorts last.
pub(crate) fn hierarchy_level(path: &str) -> i64 {
	if path.starts_with('@') {
		return SCOPED_LEVEL;
	}
	if path.starts_with("http://") {
		return HTTP_LEVEL;
	}
	if path.starts_with("https://") {
		return HTTPS_LEVEL;
	}
	if !path.starts_with("./") && FOLDER_LEAD_RE.is_match(path) {
		return FOLDER_LEVEL;
	}
	if path.starts_with("./") {
		let depth = path.split('/').filter(|segment| *segment == "..").count();

		return -(depth as i64);
	}

	i64::MAX
}

/// Sorts entries into canonical order: hierarchy level, then the path
/// case-insensitively. The sort is stable, so full ties keep their original
/// relative order.
pub(crate) fn sort_entries(mut entries: Vec<ImportEntry>) -> Vec<ImportEntry> {
	entries.sort_by(|a, b| {
		hierarchy_level(&a.path)
			.cmp(&hierarchy_level(&b.path))
			.then_with(|| caseless_cmp(&a.path, &b.path))
	});

	entries
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
	a.to_lowercase().cmp(&b.to_lowercase())
}

/// True iff both sequences carry the same path at every index.
pub(crate) fn paths_equal(current: &[ImportEntry], proposed: &[ImportEntry]) -> bool {
	current.len() == proposed.len()
		&& current.iter().zip(proposed).all(|(a, b)| a.path == b.path)
}

/// Renders the canonical textual form of one import.
///
/// Double quotes regardless of the source's original quote style.
pub(crate) fn render_sentence(aliases: Option<&[SymbolAlias]>, normalized_path: &str) -> String {
	match aliases {
		Some(aliases) => {
			let bindings =
				aliases.iter().map(SymbolAlias::render).collect::<Vec<_>>().join(", ");

			format!("import {{{bindings}}} from \"{normalized_path}\";")
		},
		None => format!("import \"{normalized_path}\";"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(path: &str) -> ImportEntry {
		ImportEntry {
			range: (0, 0),
			path: normalize_path(path),
			sentence: render_sentence(None, &normalize_path(path)),
		}
	}

	fn paths(entries: &[ImportEntry]) -> Vec<&str> {
		entries.iter().map(|entry| entry.path.as_str()).collect()
	}

	#[test]
	fn normalization_is_idempotent() {
		let once = normalize_path("../x.sol");
		let twice = normalize_path(&once);

		assert_eq!(once, "./../x.sol");
		assert_eq!(twice, once);
		assert_eq!(normalize_path("./a.sol"), "./a.sol");
		assert_eq!(normalize_path("lib.sol"), "lib.sol");
	}

	#[test]
	fn hierarchy_levels_follow_the_protocol_order() {
		assert_eq!(hierarchy_level("@scope/a.sol"), -40_000);
		assert_eq!(hierarchy_level("http://example.com/a.sol"), -30_000);
		assert_eq!(hierarchy_level("https://example.com/a.sol"), -20_000);
		assert_eq!(hierarchy_level("lib/a.sol"), -10_000);
		assert_eq!(hierarchy_level("./a.sol"), 0);
		assert_eq!(hierarchy_level("./../a.sol"), -1);
		assert_eq!(hierarchy_level("./../../a.sol"), -2);
		assert_eq!(hierarchy_level("-weird"), i64::MAX);
	}

	#[test]
	fn deeper_upward_traversal_sorts_earlier() {
		let sorted =
			sort_entries(vec![entry("./x.sol"), entry("../../x.sol"), entry("../x.sol")]);

		assert_eq!(paths(&sorted), vec!["./../../x.sol", "./../x.sol", "./x.sol"]);
	}

	#[test]
	fn scoped_then_upward_then_alphabetical() {
		let sorted = sort_entries(vec![
			entry("./b.sol"),
			entry("@scope/a.sol"),
			entry("./a.sol"),
			entry("../x.sol"),
		]);

		assert_eq!(paths(&sorted), vec!["@scope/a.sol", "./../x.sol", "./a.sol", "./b.sol"]);
	}

	#[test]
	fn tiebreak_is_case_insensitive() {
		let sorted = sort_entries(vec![entry("./B.sol"), entry("./a.sol")]);

		assert_eq!(paths(&sorted), vec!["./a.sol", "./B.sol"]);
	}

	#[test]
	fn sorting_a_canonical_sequence_is_a_no_op() {
		let canonical = vec![entry("@scope/a.sol"), entry("lib.sol"), entry("./a.sol")];
		let sorted = sort_entries(canonical.clone());

		assert!(paths_equal(&canonical, &sorted));
		assert_eq!(paths(&sorted), paths(&canonical));
	}

	#[test]
	fn paths_equal_rejects_length_and_content_mismatches() {
		let a = vec![entry("./a.sol"), entry("./b.sol")];
		let b = vec![entry("./b.sol"), entry("./a.sol")];

		assert!(!paths_equal(&a, &b));
		assert!(!paths_equal(&a, &a[..1]));
		assert!(paths_equal(&a, &a));
	}

	#[test]
	fn rendering_uses_double_quotes_and_binding_aliases() {
		let aliases = vec![
			SymbolAlias { name: "Ownable".into(), alias: None },
			SymbolAlias { name: "ERC20".into(), alias: Some("Token".into()) },
		];

		assert_eq!(
			render_sentence(Some(&aliases), "@oz/token.sol"),
			"import {Ownable, ERC20 as Token} from \"@oz/token.sol\";"
		);
		assert_eq!(render_sentence(None, "./a.sol"), "import \"./a.sol\";");
	}
}
