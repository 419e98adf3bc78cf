//! # Syntax
//! The syntax tree for Glimmer (Handlebars) templates.
//!
//! Templates are not parsed here. The tree is the shape produced by the Glimmer
//! parser, either built directly in Rust or loaded from the parser's JSON output,
//! where every node is an object tagged with a `type` field.
//!
//! Node kinds which are not known are kept in the tree as [`UnsupportedNode`]s,
//! so whoever consumes the tree can decide how to report them.

pub mod ast;
mod json;


/// Loads a syntax tree from the JSON output of the Glimmer parser.
///
/// # Examples
/// ```
/// use glimmer_syntax::{from_json, Node};
/// let tree = from_json(r#"{ "type": "Program", "body": [] }"#).unwrap();
///
/// assert!(matches!(tree, Node::Program(_)));
/// ```
///
/// # Errors
/// If the JSON is malformed, or a known node kind is missing a required field.
pub fn from_json(source: &str) -> Result<Node, serde_json::Error> {
  serde_json::from_str(source)
}

pub use ast::{Field, Node, NodeRef, UnsupportedNode};
