//! # Expressions
//!
//! Values which appear inside mustaches: paths, literals and calls.

use super::Node;
use serde::Deserialize;

/// A call inside parentheses, e.g. `(concat "a" b)`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubExpression {
  /// The helper being called
  pub path: PathExpression,
  /// Positional arguments
  #[serde(default)]
  pub params: Vec<Node>,
  /// Named arguments
  #[serde(default)]
  pub hash: Hash,
}

/// A path to a value, e.g. `user.name`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathExpression {
  /// The path as it was written
  #[serde(default)]
  pub original: String,
  /// The segments of the path
  pub parts: Vec<String>,
}
impl PathExpression {
  /// Create a path from its written form, splitting on `.`
  pub fn new(original: &str) -> Self {
    Self {
      original: original.to_owned(),
      parts: original.split('.').map(str::to_owned).collect(),
    }
  }
}

/// Named arguments, e.g. `class="a" id=b`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Hash {
  /// The arguments, in order
  #[serde(default)]
  pub pairs: Vec<HashPair>,
}
impl Hash {
  /// Are there no named arguments?
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }
}

/// A single named argument, e.g. `class="a"`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HashPair {
  /// The argument name
  pub key: String,
  /// The argument value
  pub value: Box<Node>,
}

/// A string literal, e.g. `"hello"`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StringLiteral {
  /// The value, without quotes
  pub value: String,
}

/// A number literal, e.g. `42`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NumberLiteral {
  /// The value
  pub value: f64,
}

/// A boolean literal, `true` or `false`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BooleanLiteral {
  /// The value
  pub value: bool,
}

/// The `null` literal
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NullLiteral {}
