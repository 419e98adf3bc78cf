//! # Formatter
//!
//! Consistent formatting of Glimmer (Handlebars) templates.
//!
//! Works in stages:
//! - Walks the syntax tree with a cursor, converting each node into a doc, an
//!   intermediate representation of text, lines, indentation and groups
//! - Then calculates how much of each group it can fit in the print width
//! - Converts the doc into a string, breaking the lines of the groups which don't fit
//!
//! Based upon the algorithm described by Philip Wadler in [`A prettier printer`](https://homepages.inf.ed.ac.uk/wadler/papers/prettier/prettier.pdf).

#![deny(unsafe_code)]

mod ast;
pub mod config;
mod cursor;
mod doc;
mod error;
mod formatter;
mod layout;
mod reflow;


use bumpalo::Bump as Allocator;
use glimmer_syntax::Node;

/// Opinionated formatting of a template's syntax tree into a string.
/// Tries to respect the print width given in the config.
///
/// # Examples
/// ```
/// use glimmer_formatter::{format, FormatterConfig};
/// use glimmer_syntax::from_json;
///
/// let tree = from_json(r#"{
///   "type": "Program",
///   "body": [{ "type": "TextNode", "chars": "Hello   world" }]
/// }"#).unwrap();
///
/// let formatted = format(&tree, FormatterConfig::default()).unwrap();
/// assert_eq!(formatted.trim_end(), "Hello world");
/// ```
///
/// # Errors
/// If the tree contains a node which can't be formatted. No output is produced.
pub fn format(tree: &Node, config: FormatterConfig) -> Result<String, FormatError> {
  let allocator = Allocator::new();
  let formatter = formatter::Formatter::new(config, &allocator);
  formatter.print(tree)
}

/// The intermediate representation of the formatted tree, for debugging.
///
/// # Errors
/// If the tree contains a node which can't be formatted.
pub fn debug_document(tree: &Node, config: FormatterConfig) -> Result<String, FormatError> {
  let allocator = Allocator::new();
  let formatter = formatter::Formatter::new(config, &allocator);
  let doc = formatter.doc(tree)?;
  Ok(format!("{doc:#?}"))
}

pub use config::Config as FormatterConfig;
pub use error::FormatError;
