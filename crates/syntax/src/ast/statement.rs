//! # Statements
//!
//! Nodes which make up the body of a template: markup, text and mustaches.

use super::{
  Node,
  expression::{Hash, PathExpression},
};
use serde::Deserialize;

/// A list of statements, the root of a template and the body of a block
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
  /// The statements in the program
  #[serde(default)]
  pub body: Vec<Node>,
  /// Names bound by the enclosing block, e.g. `as |item index|`
  #[serde(default)]
  pub block_params: Vec<String>,
}
impl Program {
  /// Does the program have any statements, other than whitespace-only text?
  #[must_use]
  pub fn has_statements(&self) -> bool {
    self.body.iter().any(|node| !node.is_whitespace_text())
  }
}

/// An HTML element, e.g. `<div class="a">..</div>`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ElementNode {
  /// The tag name
  pub tag: String,
  /// Attributes, in source order
  #[serde(default)]
  pub attributes: Vec<AttrNode>,
  /// Modifiers, e.g. `<div {{on "click" this.go}}>`
  #[serde(default)]
  pub modifiers: Vec<ElementModifierStatement>,
  /// The contents of the element
  #[serde(default)]
  pub children: Vec<Node>,
}

/// An attribute of an element, e.g. `class="a"`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AttrNode {
  /// The attribute name
  pub name: String,
  /// Either a [`TextNode`], a [`MustacheStatement`] or a [`ConcatStatement`]
  pub value: Box<Node>,
}

/// A block, e.g. `{{#if cond}}..{{else}}..{{/if}}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlockStatement {
  /// The helper being called
  pub path: PathExpression,
  /// Positional arguments
  #[serde(default)]
  pub params: Vec<Node>,
  /// Named arguments
  #[serde(default)]
  pub hash: Hash,
  /// The main body
  pub program: Program,
  /// The `{{else}}` body
  #[serde(default)]
  pub inverse: Option<Program>,
}

/// An interpolation, e.g. `{{name}}` or `{{{html}}}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MustacheStatement {
  /// The value or helper being called
  pub path: PathExpression,
  /// Positional arguments
  #[serde(default)]
  pub params: Vec<Node>,
  /// Named arguments
  #[serde(default)]
  pub hash: Hash,
  /// `false` for the triple-brace form, which is not HTML escaped
  #[serde(default = "default_escaped")]
  pub escaped: bool,
}

fn default_escaped() -> bool {
  true
}

/// A comment, e.g. `{{! comment }}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MustacheCommentStatement {
  /// The text of the comment
  pub value: String,
}

/// A modifier on an element, e.g. `{{action "save"}}` in `<button {{action "save"}}>`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ElementModifierStatement {
  /// The modifier being called
  pub path: PathExpression,
  /// Positional arguments
  #[serde(default)]
  pub params: Vec<Node>,
  /// Named arguments
  #[serde(default)]
  pub hash: Hash,
}

/// An attribute value mixing text and mustaches, e.g. `"a {{b}} c"`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConcatStatement {
  /// [`TextNode`]s and [`MustacheStatement`]s, in order
  pub parts: Vec<Node>,
}

/// Literal text, outside of mustaches
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TextNode {
  /// The raw characters, including whitespace
  pub chars: String,
}
impl TextNode {
  /// Create a new text node
  pub fn new(chars: impl Into<String>) -> Self {
    Self {
      chars: chars.into(),
    }
  }

  /// Is the text only whitespace?
  #[must_use]
  pub fn is_whitespace(&self) -> bool {
    self.chars.trim().is_empty()
  }
}
