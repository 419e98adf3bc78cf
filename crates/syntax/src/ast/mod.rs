//! # AST
//!
//! The definition of the syntax tree, and borrowed views into it.

pub mod expression;
pub mod statement;

pub use expression::*;
pub use statement::*;

/// A node in the syntax tree
///
/// The variants are named after the `type` tag the Glimmer parser gives each node.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
  /// A list of statements, e.g. a whole template
  Program(Program),
  /// An HTML element, e.g. `<div>..</div>`
  ElementNode(ElementNode),
  /// An element attribute, e.g. `class="a"`
  AttrNode(AttrNode),
  /// A block, e.g. `{{#if a}}..{{/if}}`
  BlockStatement(BlockStatement),
  /// An interpolation, e.g. `{{a}}`
  MustacheStatement(MustacheStatement),
  /// A comment, e.g. `{{! a }}`
  MustacheCommentStatement(MustacheCommentStatement),
  /// An element modifier, e.g. `{{on "click" a}}`
  ElementModifierStatement(ElementModifierStatement),
  /// A nested call, e.g. `(concat a b)`
  SubExpression(SubExpression),
  /// A path, e.g. `a.b`
  PathExpression(PathExpression),
  /// Named arguments, e.g. `a=1 b=2`
  Hash(Hash),
  /// A named argument, e.g. `a=1`
  HashPair(HashPair),
  /// A mixed attribute value, e.g. `"a {{b}}"`
  ConcatStatement(ConcatStatement),
  /// Literal text
  TextNode(TextNode),
  /// A string literal, e.g. `"a"`
  StringLiteral(StringLiteral),
  /// A number literal, e.g. `1`
  NumberLiteral(NumberLiteral),
  /// A boolean literal, e.g. `true`
  BooleanLiteral(BooleanLiteral),
  /// The `null` literal
  NullLiteral(NullLiteral),
  /// A node of a kind which is not known
  Unsupported(UnsupportedNode),
}
impl Node {
  /// The name of the kind of node, as given by the `type` tag
  #[must_use]
  pub fn kind(&self) -> &str {
    NodeRef::from(self).kind()
  }

  /// Is the node a text node of only whitespace?
  #[must_use]
  pub fn is_whitespace_text(&self) -> bool {
    matches!(self, Self::TextNode(text) if text.is_whitespace())
  }
}

/// A node whose kind is not part of the syntax tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedNode {
  /// The `type` tag of the node
  pub kind: String,
}

/// A borrowed reference to any node in the tree, including those held in typed fields
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
  Program(&'a Program),
  ElementNode(&'a ElementNode),
  AttrNode(&'a AttrNode),
  BlockStatement(&'a BlockStatement),
  MustacheStatement(&'a MustacheStatement),
  MustacheCommentStatement(&'a MustacheCommentStatement),
  ElementModifierStatement(&'a ElementModifierStatement),
  SubExpression(&'a SubExpression),
  PathExpression(&'a PathExpression),
  Hash(&'a Hash),
  HashPair(&'a HashPair),
  ConcatStatement(&'a ConcatStatement),
  TextNode(&'a TextNode),
  StringLiteral(&'a StringLiteral),
  NumberLiteral(&'a NumberLiteral),
  BooleanLiteral(&'a BooleanLiteral),
  NullLiteral(&'a NullLiteral),
  Unsupported(&'a UnsupportedNode),
}
impl<'a> NodeRef<'a> {
  /// The name of the kind of node, as given by the `type` tag
  #[must_use]
  pub fn kind(self) -> &'a str {
    match self {
      Self::Program(_) => "Program",
      Self::ElementNode(_) => "ElementNode",
      Self::AttrNode(_) => "AttrNode",
      Self::BlockStatement(_) => "BlockStatement",
      Self::MustacheStatement(_) => "MustacheStatement",
      Self::MustacheCommentStatement(_) => "MustacheCommentStatement",
      Self::ElementModifierStatement(_) => "ElementModifierStatement",
      Self::SubExpression(_) => "SubExpression",
      Self::PathExpression(_) => "PathExpression",
      Self::Hash(_) => "Hash",
      Self::HashPair(_) => "HashPair",
      Self::ConcatStatement(_) => "ConcatStatement",
      Self::TextNode(_) => "TextNode",
      Self::StringLiteral(_) => "StringLiteral",
      Self::NumberLiteral(_) => "NumberLiteral",
      Self::BooleanLiteral(_) => "BooleanLiteral",
      Self::NullLiteral(_) => "NullLiteral",
      Self::Unsupported(node) => node.kind.as_str(),
    }
  }

  /// Is the node a text node of only whitespace?
  #[must_use]
  pub fn is_whitespace_text(self) -> bool {
    matches!(self, Self::TextNode(text) if text.is_whitespace())
  }

  /// Looks up a child field by its name in the Glimmer tree.
  ///
  /// Returns `None` if the kind of node does not have a field of that name.
  #[must_use]
  pub fn field(self, name: &str) -> Option<Field<'a>> {
    let field = match (self, name) {
      (Self::Program(program), "body") => Field::list(&program.body),

      (Self::ElementNode(element), "attributes") => {
        Field::List(element.attributes.iter().map(NodeRef::AttrNode).collect())
      }
      (Self::ElementNode(element), "modifiers") => Field::List(
        element
          .modifiers
          .iter()
          .map(NodeRef::ElementModifierStatement)
          .collect(),
      ),
      (Self::ElementNode(element), "children") => Field::list(&element.children),

      (Self::AttrNode(attribute), "value") => Field::Node((&*attribute.value).into()),

      (Self::BlockStatement(block), "program") => Field::Node(NodeRef::Program(&block.program)),
      (Self::BlockStatement(block), "inverse") => match &block.inverse {
        Some(inverse) => Field::Node(NodeRef::Program(inverse)),
        None => Field::Absent,
      },
      (Self::BlockStatement(BlockStatement { path, params, hash, .. })
      | Self::MustacheStatement(MustacheStatement { path, params, hash, .. })
      | Self::ElementModifierStatement(ElementModifierStatement { path, params, hash })
      | Self::SubExpression(SubExpression { path, params, hash }), _) => match name {
        "path" => Field::Node(NodeRef::PathExpression(path)),
        "params" => Field::list(params),
        "hash" => Field::Node(NodeRef::Hash(hash)),
        _ => return None,
      },

      (Self::Hash(hash), "pairs") => Field::List(hash.pairs.iter().map(NodeRef::HashPair).collect()),
      (Self::HashPair(pair), "value") => Field::Node((&*pair.value).into()),
      (Self::ConcatStatement(concat), "parts") => Field::list(&concat.parts),

      _ => return None,
    };

    Some(field)
  }
}
impl<'a> From<&'a Node> for NodeRef<'a> {
  fn from(node: &'a Node) -> Self {
    match node {
      Node::Program(x) => Self::Program(x),
      Node::ElementNode(x) => Self::ElementNode(x),
      Node::AttrNode(x) => Self::AttrNode(x),
      Node::BlockStatement(x) => Self::BlockStatement(x),
      Node::MustacheStatement(x) => Self::MustacheStatement(x),
      Node::MustacheCommentStatement(x) => Self::MustacheCommentStatement(x),
      Node::ElementModifierStatement(x) => Self::ElementModifierStatement(x),
      Node::SubExpression(x) => Self::SubExpression(x),
      Node::PathExpression(x) => Self::PathExpression(x),
      Node::Hash(x) => Self::Hash(x),
      Node::HashPair(x) => Self::HashPair(x),
      Node::ConcatStatement(x) => Self::ConcatStatement(x),
      Node::TextNode(x) => Self::TextNode(x),
      Node::StringLiteral(x) => Self::StringLiteral(x),
      Node::NumberLiteral(x) => Self::NumberLiteral(x),
      Node::BooleanLiteral(x) => Self::BooleanLiteral(x),
      Node::NullLiteral(x) => Self::NullLiteral(x),
      Node::Unsupported(x) => Self::Unsupported(x),
    }
  }
}

/// The contents of a named child field of a node
#[derive(Clone, Debug)]
pub enum Field<'a> {
  /// A single child node
  Node(NodeRef<'a>),
  /// An ordered list of child nodes
  List(Vec<NodeRef<'a>>),
  /// An optional child which is not present
  Absent,
}
impl<'a> Field<'a> {
  fn list(nodes: &'a [Node]) -> Self {
    Self::List(nodes.iter().map(NodeRef::from).collect())
  }
}
