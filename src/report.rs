//! The reporting boundary between the rule and its host.
//!
//! The rule never touches file text. It hands the host diagnostics, each
//! optionally carrying a fix closure; the host decides whether to run the
//! closure against a [`Fixer`] and apply the recorded [`Edit`]s.

use crate::node::ImportDirective;

/// A deferred fix. The host runs it against a [`Fixer`] to obtain edits.
pub type Fix = Box<dyn FnOnce(&mut Fixer)>;

/// A contiguous text replacement proposed by a fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
	/// Start byte offset, inclusive.
	pub start: usize,
	/// End byte offset, exclusive.
	pub end: usize,
	/// Replacement text for the range.
	pub replacement: String,
	/// The rule that proposed this edit.
	pub rule: &'static str,
}

/// Records the edits a fix closure proposes.
#[derive(Debug)]
pub struct Fixer {
	rule: &'static str,
	edits: Vec<Edit>,
}
impl Fixer {
	/// A fixer whose edits are attributed to `rule`.
	pub fn new(rule: &'static str) -> Self {
		Self { rule, edits: Vec::new() }
	}

	/// Records a replacement of the byte range `[range.0, range.1)` with
	/// `replacement`. A zero-width range is an insertion.
	pub fn replace_text_range(&mut self, range: (usize, usize), replacement: impl Into<String>) {
		self.edits.push(Edit {
			start: range.0,
			end: range.1,
			replacement: replacement.into(),
			rule: self.rule,
		});
	}

	/// The recorded edits, in proposal order.
	pub fn into_edits(self) -> Vec<Edit> {
		self.edits
	}
}

/// The host-side sink for diagnostics.
pub trait Reporter {
	/// Reports one diagnostic against `node`. `fix` is present when the rule
	/// can repair the violation mechanically.
	fn error(
		&mut self,
		node: &ImportDirective,
		rule_id: &'static str,
		message: &str,
		fix: Option<Fix>,
	);
}

/// One reported violation, as recorded by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Start line of the offending node, zero when the host gave no location.
	pub line: usize,
	/// The reporting rule's id.
	pub rule: &'static str,
	/// Human-readable description.
	pub message: String,
	/// Whether a fix accompanied the report.
	pub fixable: bool,
}
impl Diagnostic {
	/// Renders the diagnostic the way check output prints it.
	pub fn format(&self) -> String {
		format!(
			"{}:1: [{}] {}{}",
			self.line,
			self.rule,
			self.message,
			if self.fixable { " (fixable)" } else { "" }
		)
	}
}

/// A [`Reporter`] that materializes every fix immediately and keeps both the
/// diagnostics and the proposed edits, in reporting order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
	/// Diagnostics in the order they were reported.
	pub diagnostics: Vec<Diagnostic>,
	/// Edits in the order their fixes were reported.
	pub edits: Vec<Edit>,
}
impl RecordingReporter {
	/// An empty reporter.
	pub fn new() -> Self {
		Self::default()
	}
}
impl Reporter for RecordingReporter {
	fn error(
		&mut self,
		node: &ImportDirective,
		rule_id: &'static str,
		message: &str,
		fix: Option<Fix>,
	) {
		let fixable = fix.is_some();

		if let Some(fix) = fix {
			let mut fixer = Fixer::new(rule_id);

			fix(&mut fixer);

			self.edits.extend(fixer.into_edits());
		}

		self.diagnostics.push(Diagnostic {
			line: node.start_line(),
			rule: rule_id,
			message: message.to_owned(),
			fixable,
		});
	}
}
