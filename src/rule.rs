//! The `import-order-separation` rule.

mod order;
mod reorder;
mod spacing;

use std::mem;

use tracing::debug;

use crate::{
	config::RuleOptions,
	node::{self, ImportDirective},
	report::Reporter,
};

/// The rule id carried by every diagnostic and edit this rule emits.
pub const RULE_ID: &str = "import-order-separation";

pub(crate) const ORDER_MESSAGE: &str = "Wrong import order";
pub(crate) const BLANK_LINE_MESSAGE: &str = "Expected a blank line between import groups";

/// One import, reduced to what the sort and the rewrite operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportEntry {
	pub(crate) range: (usize, usize),
	pub(crate) path: String,
	pub(crate) sentence: String,
}

/// Everything the decision procedure needs for one file.
///
/// Constructed fresh at end-of-file from the imports taken out of the rule,
/// and dropped when the procedure returns; no per-file state outlives it.
pub(crate) struct FileAnalysis<'a> {
	pub(crate) options: &'a RuleOptions,
	pub(crate) nodes: Vec<ImportDirective>,
	pub(crate) entries: Vec<ImportEntry>,
}
impl<'a> FileAnalysis<'a> {
	fn new(options: &'a RuleOptions, nodes: Vec<ImportDirective>) -> Self {
		let entries = nodes
			.iter()
			.map(|node| {
				let path = order::normalize_path(node.source_path().unwrap_or_default());
				let sentence = order::render_sentence(node.symbol_aliases.as_deref(), &path);

				ImportEntry { range: node.range.unwrap_or_default(), path, sentence }
			})
			.collect();

		Self { options, nodes, entries }
	}
}

/// Checks that a file's import directives are grouped and ordered per
/// policy, and proposes fixes when they are not.
///
/// The host drives the rule: [`enter_import_directive`] once per import node
/// during traversal, then [`exit_source_unit`] once at end of file. One
/// instance may be reused across files; each file's analysis starts from a
/// clean state.
///
/// [`enter_import_directive`]: ImportOrderSeparation::enter_import_directive
/// [`exit_source_unit`]: ImportOrderSeparation::exit_source_unit
#[derive(Debug, Default)]
pub struct ImportOrderSeparation {
	options: RuleOptions,
	imports: Vec<ImportDirective>,
}
impl ImportOrderSeparation {
	/// Every diagnostic this rule emits may carry a fix.
	pub const FIXABLE: bool = true;

	/// A rule instance with the given grouping policy.
	pub fn new(options: RuleOptions) -> Self {
		Self { options, imports: Vec::new() }
	}

	/// Visitor entry: records one import directive in traversal order.
	///
	/// Nodes whose type tag is not exactly `"ImportDirective"` are ignored.
	pub fn enter_import_directive(&mut self, node: ImportDirective) {
		if node.node_type == node::IMPORT_DIRECTIVE {
			self.imports.push(node);
		}
	}

	/// Visitor exit: runs the decision procedure for the finished file.
	///
	/// If the canonical order differs from the current one, the whole import
	/// block is regenerated as one set of fixes; otherwise only inter-group
	/// spacing is checked. Either way the rule is left clean for the next
	/// file.
	pub fn exit_source_unit(&mut self, reporter: &mut dyn Reporter) {
		// The collected imports leave the rule before any analysis runs, so
		// every path resets the per-file state.
		let mut imports = mem::take(&mut self.imports);

		if imports.len() < 2 {
			return;
		}

		// The host traversal is assumed to follow source order; re-sort by
		// line in case it does not.
		imports.sort_by_key(ImportDirective::start_line);

		let analysis = FileAnalysis::new(&self.options, imports);
		let ordered = order::sort_entries(analysis.entries.clone());

		if order::paths_equal(&analysis.entries, &ordered) {
			debug!(imports = analysis.entries.len(), "order canonical, checking group spacing");

			spacing::check_group_spacing(&analysis, reporter);
		} else {
			debug!(imports = analysis.entries.len(), "order not canonical, rewriting block");

			reorder::emit_block_rewrite(&analysis, &ordered, reporter);
		}
	}
}
