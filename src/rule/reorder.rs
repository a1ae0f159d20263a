//! Full regeneration of the import block in canonical order.

use super::{FileAnalysis, ImportEntry, ORDER_MESSAGE, RULE_ID};
use crate::report::Reporter;

struct Replacement {
	start: usize,
	end: usize,
	text: String,
	separator: &'static str,
}

/// Rewrites the whole import block: every entry is re-rendered in canonical
/// order, separated by one newline within a group and a blank line across
/// group boundaries.
///
/// Target ranges tile forward from the minimum start offset among the
/// original imports; each intermediate replacement is exactly as long as its
/// range, so only the last edit changes the text length. The last entry is
/// replaced through the original block's final end offset to absorb any
/// leftover trailing text. Emission runs bottom to top to keep earlier
/// offsets valid.
pub(crate) fn emit_block_rewrite(
	analysis: &FileAnalysis<'_>,
	ordered: &[ImportEntry],
	reporter: &mut dyn Reporter,
) {
	let groups =
		ordered.iter().map(|entry| analysis.options.group_index(&entry.path)).collect::<Vec<_>>();
	let mut cursor =
		analysis.entries.iter().map(|entry| entry.range.0).min().unwrap_or_default();
	let mut replacements = Vec::with_capacity(ordered.len());

	for (index, entry) in ordered.iter().enumerate() {
		let separator = match groups.get(index + 1) {
			Some(next_group) if *next_group == groups[index] => "\n",
			Some(_) => "\n\n",
			None => "",
		};
		let end = cursor + entry.sentence.len() + separator.len();

		replacements.push(Replacement {
			start: cursor,
			end,
			text: entry.sentence.clone(),
			separator,
		});

		cursor = end;
	}

	let block_end = analysis.entries.last().map(|entry| entry.range.1).unwrap_or_default();
	let last_index = replacements.len().saturating_sub(1);

	for (index, replacement) in replacements.into_iter().enumerate().rev() {
		let Some(node) = analysis.nodes.get(index) else {
			continue;
		};
		let fix: crate::report::Fix = if index == last_index {
			Box::new(move |fixer| {
				fixer.replace_text_range((replacement.start, block_end), replacement.text);
			})
		} else {
			Box::new(move |fixer| {
				fixer.replace_text_range(
					(replacement.start, replacement.end),
					format!("{}{}", replacement.text, replacement.separator),
				);
			})
		};

		reporter.error(node, RULE_ID, ORDER_MESSAGE, Some(fix));
	}
}
