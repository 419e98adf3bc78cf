use bumpalo::{boxed::Box, collections::Vec};
use std::fmt;

/// Representation of part of a file to be laid out
///
/// Has no knowledge of the syntax tree it was printed from. Nodes are allocated in
/// the formatter's arena, and live only as long as a single formatting pass.
#[derive(Default)]
pub enum Doc<'a> {
  /// No content
  #[default]
  Empty,
  /// Text content (up to a single line)
  Text(&'a str),
  /// A space, or a line break if the enclosing group breaks
  Line,
  /// Nothing, or a line break if the enclosing group breaks
  SoftLine,
  /// Always a line break, forces all enclosing groups to break
  HardLine,
  /// A combination of multiple docs
  Concat(Vec<'a, Doc<'a>>),
  /// A section whose lines either all break, or all stay flat
  Group {
    /// The contents of the group
    doc: Box<'a, Doc<'a>>,
    /// The contents hold a hard line, so the group always breaks
    breaks: bool,
  },
  /// Indent the contents by one level, after a line break
  Indent(Box<'a, Doc<'a>>),
  /// Indent the contents by a number of columns, after a line break
  Align(u16, Box<'a, Doc<'a>>),
  /// Alternating content and separators, where each separator only breaks if the
  /// following content doesn't fit on the line
  Fill(Vec<'a, Doc<'a>>),
  /// Choose between the first doc if the enclosing group breaks, otherwise the second
  IfBreak(Box<'a, Doc<'a>>, Box<'a, Doc<'a>>),
}
impl Doc<'_> {
  /// Does the doc contain a hard line, which forces enclosing groups to break?
  ///
  /// Nested groups aren't walked again, they know whether they break.
  pub(crate) fn contains_hard_line(&self) -> bool {
    match self {
      Doc::HardLine => true,
      Doc::Empty | Doc::Text(_) | Doc::Line | Doc::SoftLine => false,
      Doc::Concat(docs) | Doc::Fill(docs) => docs.iter().any(Doc::contains_hard_line),
      Doc::Group { breaks, .. } => *breaks,
      Doc::Indent(doc) | Doc::Align(_, doc) => doc.contains_hard_line(),
      Doc::IfBreak(broken, _) => broken.contains_hard_line(),
    }
  }
}
impl fmt::Debug for Doc<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => write!(f, "Empty"),
      Self::Text(text) => write!(f, "Text {text:?}"),
      Self::Line => write!(f, "Line"),
      Self::SoftLine => write!(f, "SoftLine"),
      Self::HardLine => write!(f, "HardLine"),
      Self::Concat(docs) => f.debug_list().entries(docs).finish(),
      Self::Group { doc, .. } => f.debug_tuple("Group").field(doc).finish(),
      Self::Indent(doc) => f.debug_tuple("Indent").field(doc).finish(),
      Self::Align(width, doc) => f.debug_tuple("Align").field(width).field(doc).finish(),
      Self::Fill(docs) => f.debug_tuple("Fill").field(docs).finish(),
      Self::IfBreak(broken, flat) => f.debug_tuple("IfBreak").field(broken).field(flat).finish(),
    }
  }
}
