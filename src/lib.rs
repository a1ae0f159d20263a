//! Solidity import ordering and group separation lint rule.
//!
//! A single host-driven rule, `import-order-separation`: it classifies each
//! import directive into a group, computes a canonical order, and either
//! verifies that the file already conforms or proposes text edits that make
//! it conform. The host linter owns the parser, configuration discovery,
//! file I/O, and reporting output; this crate owns only the decision
//! procedure and the edit plumbing.
//!
//! ```
//! use serde_json::json;
//! use sol_import_order::{
//! 	ImportDirective, ImportOrderSeparation, RecordingReporter, RuleOptions, SourceLocation,
//! 	SourcePath, apply_edits,
//! };
//!
//! let mut text = "import \"./b.sol\";\nimport \"@scope/a.sol\";\n".to_owned();
//! let mut rule = ImportOrderSeparation::new(RuleOptions::from_value(Some(&json!({
//! 	"importOrder": ["^@scope", "^\\."],
//! }))));
//!
//! rule.enter_import_directive(ImportDirective {
//! 	node_type: "ImportDirective".to_owned(),
//! 	loc: Some(SourceLocation { start_line: 1, end_line: 1 }),
//! 	range: Some((0, 17)),
//! 	path: Some(SourcePath::Literal("./b.sol".to_owned())),
//! 	symbol_aliases: None,
//! });
//! rule.enter_import_directive(ImportDirective {
//! 	node_type: "ImportDirective".to_owned(),
//! 	loc: Some(SourceLocation { start_line: 2, end_line: 2 }),
//! 	range: Some((18, 40)),
//! 	path: Some(SourcePath::Literal("@scope/a.sol".to_owned())),
//! 	symbol_aliases: None,
//! });
//!
//! let mut reporter = RecordingReporter::new();
//!
//! rule.exit_source_unit(&mut reporter);
//! apply_edits(&mut text, reporter.edits).unwrap();
//!
//! assert_eq!(text, "import \"@scope/a.sol\";\n\nimport \"./b.sol\";\n");
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

mod config;
mod fixes;
mod node;
mod report;
mod rule;

mod prelude {
	pub use color_eyre::{Result, eyre};
}

pub use config::RuleOptions;
pub use fixes::apply_edits;
pub use node::{ImportDirective, SourceLocation, SourcePath, SymbolAlias};
pub use report::{Diagnostic, Edit, Fix, Fixer, RecordingReporter, Reporter};
pub use rule::{ImportOrderSeparation, RULE_ID};
