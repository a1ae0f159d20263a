//! Host-side application of proposed edits.

use crate::{prelude::*, report::Edit};

/// Applies `edits` to `text`, bottom to top, and returns how many were
/// applied.
///
/// Edits are sorted by position first; when two edits overlap, the earlier
/// one wins and the later one is dropped. Applying in reverse source order
/// keeps every remaining edit's offsets valid while later text is being
/// rewritten. An edit whose range is inverted, lands past the end of the
/// text, or splits a UTF-8 character is an error.
pub fn apply_edits(text: &mut String, mut edits: Vec<Edit>) -> Result<usize> {
	if edits.is_empty() {
		return Ok(0);
	}

	edits.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)).then(a.rule.cmp(b.rule)));

	let mut filtered = Vec::new();
	let mut last_end = 0_usize;

	for edit in edits {
		if edit.start < last_end {
			continue;
		}

		last_end = edit.end;

		filtered.push(edit);
	}

	let applied = filtered.len();

	for edit in filtered.iter().rev() {
		if edit.end > text.len()
			|| edit.start > edit.end
			|| !text.is_char_boundary(edit.start)
			|| !text.is_char_boundary(edit.end)
		{
			return Err(eyre::eyre!(
				"Invalid edit range {}..{} for text length {}.",
				edit.start,
				edit.end,
				text.len()
			));
		}

		text.replace_range(edit.start..edit.end, &edit.replacement);
	}

	Ok(applied)
}
