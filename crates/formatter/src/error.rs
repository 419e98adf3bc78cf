use std::{error, fmt};

/// An error which stops a template from being formatted
///
/// Both errors mean the printer and the syntax tree disagree about the shape of the
/// tree, they are never caused by the contents of a well-formed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
  /// A node of a kind the printer does not know how to print
  UnsupportedNodeKind {
    /// The kind of the node
    kind: String,
  },
  /// Navigated to a field which the node does not have
  FieldNotFound {
    /// The kind of the node
    kind: String,
    /// The name of the missing field
    field: String,
  },
}
impl FormatError {
  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> &'static str {
    match self {
      Self::UnsupportedNodeKind { .. } => "Unsupported Node Kind",
      Self::FieldNotFound { .. } => "Field Not Found",
    }
  }

  /// The body of the error message describing what has gone wrong
  #[must_use]
  pub fn message(&self) -> String {
    match self {
      Self::UnsupportedNodeKind { kind } => {
        format!("unknown glimmer node type `{kind}`, it can't be formatted")
      }
      Self::FieldNotFound { kind, field } => {
        format!("nodes of type `{kind}` don't have a field `{field}`")
      }
    }
  }
}
impl fmt::Display for FormatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message())
  }
}
impl error::Error for FormatError {}
