//! Host-facing syntax node types for import directives.
//!
//! The host linter owns the parser; it hands the rule one value per import
//! directive, shaped like the nodes below. Every field the rule does not
//! strictly need is optional, and absence degrades the analysis rather than
//! failing it.

use serde::Deserialize;

pub(crate) const IMPORT_DIRECTIVE: &str = "ImportDirective";

/// One-based start/end lines of a node, as reported by the host parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
	/// Line the node starts on.
	pub start_line: usize,
	/// Line the node ends on.
	pub end_line: usize,
}

/// The source-path field of an import directive.
///
/// Hosts have shipped three shapes for this field over time; all of them
/// resolve to the same string. Any other shape is "unresolvable" and is
/// modeled as an absent path on [`ImportDirective`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SourcePath {
	/// A plain string literal.
	Literal(String),
	/// An object carrying the path in a `value` field.
	Value {
		/// The path string.
		value: String,
	},
	/// An object carrying the path in a `name` field.
	Named {
		/// The path string.
		name: String,
	},
}
impl SourcePath {
	/// The path string, regardless of which shape the host used.
	pub fn resolve(&self) -> &str {
		match self {
			Self::Literal(path) => path,
			Self::Value { value } => value,
			Self::Named { name } => name,
		}
	}
}

/// One named binding of an import, with its optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolAlias {
	/// The imported symbol name.
	pub name: String,
	/// The local alias, if the import renames the symbol.
	pub alias: Option<String>,
}
impl SymbolAlias {
	pub(crate) fn render(&self) -> String {
		match &self.alias {
			Some(alias) => format!("{} as {alias}", self.name),
			None => self.name.clone(),
		}
	}
}

/// An import directive observed by the host traversal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDirective {
	/// The host's node type tag; only `"ImportDirective"` nodes are analyzed.
	pub node_type: String,
	/// Start/end lines, used by the spacing check.
	pub loc: Option<SourceLocation>,
	/// Byte range `[start, end)` into the file text, used by fixes.
	pub range: Option<(usize, usize)>,
	/// The imported source path, if the host could resolve one.
	pub path: Option<SourcePath>,
	/// Named bindings with optional aliases, if any.
	pub symbol_aliases: Option<Vec<SymbolAlias>>,
}
impl ImportDirective {
	/// The resolved source path, or `None` when the path field is missing.
	pub fn source_path(&self) -> Option<&str> {
		self.path.as_ref().map(SourcePath::resolve)
	}

	pub(crate) fn start_line(&self) -> usize {
		self.loc.map(|loc| loc.start_line).unwrap_or_default()
	}
}
