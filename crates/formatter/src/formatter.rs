use crate::{config::Config, cursor::Cursor, doc::Doc, error::FormatError, layout};
use bumpalo::{Bump as Allocator, boxed::Box, collections::Vec};
use glimmer_syntax::Node;
use std::mem;

/// A node of the syntax tree which can be printed
pub trait Printable<'a> {
  /// Convert the node into a doc.
  ///
  /// The cursor is positioned at the node being printed.
  fn print(&'a self, f: &Formatter<'a>, cursor: &mut Cursor<'a>) -> Result<Doc<'a>, FormatError>;
}

/// Formatter used to create, then lay out, the doc for a syntax tree
pub struct Formatter<'a> {
  pub(crate) config: Config,
  pub(crate) allocator: &'a Allocator,
}
impl<'a> Formatter<'a> {
  pub(crate) fn new(config: Config, allocator: &'a Allocator) -> Self {
    Self { config, allocator }
  }

  /// Print the syntax tree into a doc
  pub(crate) fn doc(&self, tree: &'a Node) -> Result<Doc<'a>, FormatError> {
    let mut cursor = Cursor::new(tree);
    self.print_node(&mut cursor)
  }

  /// Format the syntax tree into a string
  pub(crate) fn print(&self, tree: &'a Node) -> Result<String, FormatError> {
    let doc = self.doc(tree)?;
    let mut output = layout::print(&doc, &self.config);

    if !output.is_empty() {
      output.push_str(self.config.line_ending.as_str());
    }
    Ok(output)
  }

  /// Text which isn't borrowed from the syntax tree
  pub(crate) fn text(&self, text: &str) -> Doc<'a> {
    Doc::Text(self.allocator.alloc_str(text))
  }

  /// Create a new indentation node
  pub(crate) fn indent<const N: usize>(&self, ir: [Doc<'a>; N]) -> Doc<'a> {
    Doc::Indent(Box::new_in(self.concat(ir), self.allocator))
  }

  /// Create a new alignment node, indenting by a fixed number of columns
  pub(crate) fn align<const N: usize>(&self, width: u16, ir: [Doc<'a>; N]) -> Doc<'a> {
    Doc::Align(width, Box::new_in(self.concat(ir), self.allocator))
  }

  /// Create a new group, an option for the layout to break the source on
  ///
  /// Whether it holds a hard line is worked out once, when it is built.
  pub(crate) fn group<const N: usize>(&self, ir: [Doc<'a>; N]) -> Doc<'a> {
    let doc = self.concat(ir);
    Doc::Group {
      breaks: doc.contains_hard_line(),
      doc: Box::new_in(doc, self.allocator),
    }
  }

  /// Merge multiple docs into a single doc
  pub(crate) fn concat<const N: usize>(&self, mut ir: [Doc<'a>; N]) -> Doc<'a> {
    match N {
      0 => Doc::Empty,
      1 => mem::take(&mut ir[0]),
      _ => Doc::Concat(Vec::from_iter_in(ir, self.allocator)),
    }
  }

  /// Merge multiple docs together from an iterator
  pub(crate) fn concat_iterator(&self, ir: impl IntoIterator<Item = Doc<'a>>) -> Doc<'a> {
    Doc::Concat(Vec::from_iter_in(ir, self.allocator))
  }

  /// Join docs together, with a [`Doc::Line`] between each
  pub(crate) fn join_lines(&self, ir: impl IntoIterator<Item = Doc<'a>>) -> Doc<'a> {
    let mut docs = Vec::new_in(self.allocator);
    for doc in ir {
      if !docs.is_empty() {
        docs.push(Doc::Line);
      }
      docs.push(doc);
    }
    Doc::Concat(docs)
  }
}
