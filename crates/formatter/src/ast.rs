use super::{
  cursor::Cursor,
  doc::Doc,
  error::FormatError,
  formatter::{Formatter, Printable},
  reflow::word_wrap,
};
use bumpalo::collections::Vec;
use glimmer_syntax::{Node, NodeRef, ast::*};

/// Elements which can't have children, so close themselves when they are empty.
///
/// <https://html.spec.whatwg.org/multipage/syntax.html#void-elements>
const VOID_TAGS: [&str; 14] = [
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

impl<'a> Formatter<'a> {
  /// Print the node at the cursor
  pub(crate) fn print_node(&self, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    match cursor.current() {
      NodeRef::Program(program) => program.print(self, cursor),
      NodeRef::ElementNode(element) => element.print(self, cursor),
      NodeRef::AttrNode(attribute) => attribute.print(self, cursor),
      NodeRef::BlockStatement(block) => block.print(self, cursor),
      NodeRef::MustacheStatement(mustache) => mustache.print(self, cursor),
      NodeRef::MustacheCommentStatement(comment) => comment.print(self, cursor),
      NodeRef::ElementModifierStatement(modifier) => modifier.print(self, cursor),
      NodeRef::SubExpression(call) => call.print(self, cursor),
      NodeRef::PathExpression(path) => path.print(self, cursor),
      NodeRef::Hash(hash) => hash.print(self, cursor),
      NodeRef::HashPair(pair) => pair.print(self, cursor),
      NodeRef::ConcatStatement(concat) => concat.print(self, cursor),
      NodeRef::TextNode(text) => text.print(self, cursor),
      NodeRef::StringLiteral(literal) => literal.print(self, cursor),
      NodeRef::NumberLiteral(literal) => literal.print(self, cursor),
      NodeRef::BooleanLiteral(literal) => literal.print(self, cursor),
      NodeRef::NullLiteral(literal) => literal.print(self, cursor),
      NodeRef::Unsupported(node) => Err(FormatError::UnsupportedNodeKind {
        kind: node.kind.clone(),
      }),
    }
  }

  fn print_field(&self, cursor: &mut Cursor<'a>, field: &str) -> Result<Doc<'a>, FormatError> {
    cursor.into_field(field, |cursor| self.print_node(cursor))
  }

  fn print_list(
    &self,
    cursor: &mut Cursor<'a>,
    field: &str,
  ) -> Result<std::vec::Vec<Doc<'a>>, FormatError> {
    cursor.map_field(field, |cursor| self.print_node(cursor))
  }

  /// The path, then the params and hash which are passed to it.
  ///
  /// Shared by mustaches, blocks, modifiers and subexpressions. The params and the hash
  /// are grouped separately, so one can break without the other.
  fn print_call(
    &self,
    cursor: &mut Cursor<'a>,
    params: &[Node],
    hash: &Hash,
  ) -> Result<Doc<'a>, FormatError> {
    let path = self.print_field(cursor, "path")?;

    let params = if params.is_empty() {
      Doc::Empty
    } else {
      let params = self.print_list(cursor, "params")?;
      self.group([Doc::Line, self.join_lines(params)])
    };

    let hash = if hash.is_empty() {
      Doc::Empty
    } else {
      self.group([Doc::Line, self.print_field(cursor, "hash")?])
    };

    Ok(self.group([path, params, hash]))
  }

  /// Print the statements of a program or element.
  ///
  /// Text which is only whitespace is skipped, and other text is reflowed. Markup is
  /// always put on a new line, but text can follow on from the previous statement.
  fn print_children(&self, cursor: &mut Cursor<'a>, field: &str) -> Result<Doc<'a>, FormatError> {
    let mut children = Vec::new_in(self.allocator);

    cursor.each_field(field, |cursor| {
      let child = cursor.current();
      if child.is_whitespace_text() {
        return Ok(());
      }

      if !children.is_empty() {
        children.push(match child {
          NodeRef::TextNode(_) => Doc::SoftLine,
          _ => Doc::HardLine,
        });
      }

      children.push(match child {
        NodeRef::TextNode(text) => word_wrap(&text.chars, self.allocator),
        _ => self.print_node(cursor)?,
      });
      Ok(())
    })?;

    Ok(Doc::Concat(children))
  }
}

impl<'a> Printable<'a> for Program {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    f.print_children(cursor, "body")
  }
}
impl<'a> Printable<'a> for ElementNode {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    let self_closing = VOID_TAGS.contains(&self.tag.as_str()) && self.children.is_empty();
    let has_children = self.children.iter().any(|child| !child.is_whitespace_text());

    let attributes = if self.attributes.is_empty() {
      Doc::Empty
    } else {
      let attributes = f.print_list(cursor, "attributes")?;
      f.concat([Doc::Text(" "), f.join_lines(attributes)])
    };

    let modifiers = if self.modifiers.is_empty() {
      Doc::Empty
    } else {
      let separator = if self.attributes.is_empty() {
        Doc::Text(" ")
      } else {
        Doc::Line
      };
      let modifiers = f.print_list(cursor, "modifiers")?;
      f.concat([separator, f.join_lines(modifiers)])
    };

    // Wrapped attributes line up after `<tag `
    let alignment = u16::try_from(self.tag.chars().count() + 2).unwrap_or(u16::MAX);
    let opening = f.group([
      Doc::Text("<"),
      Doc::Text(&self.tag),
      f.align(alignment, [attributes, modifiers]),
      Doc::Text(if self_closing { " />" } else { ">" }),
    ]);

    let children = if has_children {
      f.indent([Doc::SoftLine, f.print_children(cursor, "children")?])
    } else {
      Doc::Empty
    };

    let closing = if self_closing {
      Doc::Empty
    } else {
      f.concat([
        Doc::SoftLine,
        Doc::Text("</"),
        Doc::Text(&self.tag),
        Doc::Text(">"),
      ])
    };

    Ok(f.group([opening, children, closing]))
  }
}
impl<'a> Printable<'a> for AttrNode {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    // Mustache and concat values bring their own braces or quotes
    let quote = || match *self.value {
      Node::TextNode(_) => Doc::Text("\""),
      _ => Doc::Empty,
    };

    Ok(f.concat([
      Doc::Text(&self.name),
      Doc::Text("="),
      quote(),
      f.print_field(cursor, "value")?,
      quote(),
    ]))
  }
}
impl<'a> Printable<'a> for BlockStatement {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    let block_params = if self.program.block_params.is_empty() {
      Doc::Empty
    } else {
      f.concat([
        Doc::Line,
        Doc::Text("as |"),
        f.join_lines(self.program.block_params.iter().map(|name| Doc::Text(name))),
        Doc::Text("|"),
      ])
    };

    let opening = f.group([
      Doc::Text("{{#"),
      f.indent([f.print_call(cursor, &self.params, &self.hash)?, block_params]),
      Doc::SoftLine,
      Doc::Text("}}"),
    ]);

    let program = if self.program.has_statements() {
      f.indent([Doc::HardLine, f.print_field(cursor, "program")?])
    } else {
      Doc::Empty
    };

    let inverse = match &self.inverse {
      Some(inverse) => {
        let body = if inverse.has_statements() {
          f.indent([Doc::HardLine, f.print_field(cursor, "inverse")?])
        } else {
          Doc::Empty
        };
        f.concat([Doc::HardLine, Doc::Text("{{else}}"), body])
      }
      None => Doc::Empty,
    };

    let closing = f.concat([
      Doc::HardLine,
      Doc::Text("{{/"),
      f.print_field(cursor, "path")?,
      Doc::Text("}}"),
    ]);

    Ok(f.group([opening, program, inverse, closing]))
  }
}
impl<'a> Printable<'a> for MustacheStatement {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    let (opening, closing) = if self.escaped {
      ("{{", "}}")
    } else {
      ("{{{", "}}}")
    };

    Ok(f.group([
      Doc::Text(opening),
      f.indent([f.print_call(cursor, &self.params, &self.hash)?]),
      Doc::Text(closing),
    ]))
  }
}
impl<'a> Printable<'a> for MustacheCommentStatement {
  fn print(&'a self, f: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(f.group([
      Doc::Text("{{!"),
      f.indent([Doc::Line, word_wrap(&self.value, f.allocator)]),
      Doc::Line,
      Doc::Text("}}"),
    ]))
  }
}
impl<'a> Printable<'a> for ElementModifierStatement {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(f.group([
      Doc::Text("{{"),
      f.print_call(cursor, &self.params, &self.hash)?,
      Doc::Text("}}"),
    ]))
  }
}
impl<'a> Printable<'a> for SubExpression {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(f.group([
      Doc::Text("("),
      f.indent([f.print_call(cursor, &self.params, &self.hash)?]),
      Doc::SoftLine,
      Doc::Text(")"),
    ]))
  }
}
impl<'a> Printable<'a> for PathExpression {
  fn print(&'a self, f: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(match self.parts.as_slice() {
      [part] => Doc::Text(part),
      parts => f.text(&parts.join(".")),
    })
  }
}
impl<'a> Printable<'a> for Hash {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    let pairs = f.print_list(cursor, "pairs")?;
    Ok(f.join_lines(pairs))
  }
}
impl<'a> Printable<'a> for HashPair {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(f.concat([
      Doc::Text(&self.key),
      Doc::Text("="),
      f.print_field(cursor, "value")?,
    ]))
  }
}
impl<'a> Printable<'a> for ConcatStatement {
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    // Always double quoted, whatever the quote preference
    let parts = f.print_list(cursor, "parts")?;
    Ok(f.group([
      Doc::Text("\""),
      f.concat_iterator(parts),
      Doc::Text("\""),
    ]))
  }
}
impl<'a> Printable<'a> for TextNode {
  fn print(&'a self, _: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(Doc::Text(&self.chars))
  }
}
impl<'a> Printable<'a> for StringLiteral {
  fn print(&'a self, f: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    // Quotes inside the string aren't escaped, the value is printed as it is
    if self.value.contains(['"', '\'']) {
      return Ok(Doc::Text(&self.value));
    }

    let quote = if f.config.single_quote { "'" } else { "\"" };
    Ok(f.concat([
      Doc::Text(quote),
      Doc::Text(&self.value),
      Doc::Text(quote),
    ]))
  }
}
impl<'a> Printable<'a> for NumberLiteral {
  fn print(&'a self, f: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(f.text(&number_to_string(self.value)))
  }
}

impl<'a> Printable<'a> for BooleanLiteral {
  fn print(&'a self, _: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(Doc::Text(if self.value { "true" } else { "false" }))
  }
}
impl<'a> Printable<'a> for NullLiteral {
  fn print(&'a self, _: &Formatter<'a>, _: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError> {
    Ok(Doc::Text("null"))
  }
}

/// Shortest text which reads back as the same number, in the form JavaScript writes it.
///
/// Plain decimals between `1e-6` and `1e21`, exponents like `1e+21` and `1.5e-7` outside.
fn number_to_string(value: f64) -> String {
  let magnitude = value.abs();

  if value == 0.0 {
    "0".to_owned()
  } else if value.is_nan() {
    "NaN".to_owned()
  } else if value.is_infinite() {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}Infinity")
  } else if (1e-6..1e21).contains(&magnitude) {
    value.to_string()
  } else {
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
      Some((digits, exponent)) if !exponent.starts_with('-') => format!("{digits}e+{exponent}"),
      _ => exponential,
    }
  }
}
