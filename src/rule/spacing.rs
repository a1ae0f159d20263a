//! Blank-line separation between adjacent import groups.

use tracing::trace;

use super::{BLANK_LINE_MESSAGE, FileAnalysis, RULE_ID};
use crate::report::Reporter;

/// Checks that imports from differing groups are separated by at least one
/// blank line. Runs only when the import order is already canonical.
///
/// Imports missing a resolvable path or location are skipped. A violation
/// with a known range gets a fix inserting a newline before the import; one
/// without a range is reported with no fix. Fixable violations are emitted
/// bottom to top so that inserting text for a later one never invalidates an
/// earlier offset.
pub(crate) fn check_group_spacing(analysis: &FileAnalysis<'_>, reporter: &mut dyn Reporter) {
	let mut prev: Option<(usize, usize)> = None;
	let mut violations = Vec::new();

	for (index, node) in analysis.nodes.iter().enumerate() {
		let (Some(path), Some(loc)) = (node.source_path(), node.loc) else {
			continue;
		};
		// Grouping uses the path as written; normalization only feeds the
		// sort and the rendering.
		let group = analysis.options.group_index(path);

		if let Some((prev_group, prev_end_line)) = prev
			&& group != prev_group
			&& loc.start_line < prev_end_line + 2
		{
			trace!(line = loc.start_line, "missing blank line between import groups");

			match node.range {
				Some(range) => violations.push((index, range.0)),
				None => reporter.error(node, RULE_ID, BLANK_LINE_MESSAGE, None),
			}
		}

		prev = Some((group, loc.end_line));
	}

	for (index, insert_at) in violations.into_iter().rev() {
		let Some(node) = analysis.nodes.get(index) else {
			continue;
		};

		reporter.error(
			node,
			RULE_ID,
			BLANK_LINE_MESSAGE,
			Some(Box::new(move |fixer| fixer.replace_text_range((insert_at, insert_at), "\n"))),
		);
	}
}
