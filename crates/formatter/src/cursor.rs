//! # Cursor
//!
//! Navigates the syntax tree while printing, field by field.
//!
//! The cursor is a stack of the nodes from below the root to the current position. Visiting
//! a field pushes the child, runs the callback, then pops the child again, so the
//! position is restored once the visit finishes, whether the callback succeeded or not.

use crate::error::FormatError;
use glimmer_syntax::{Field, Node, NodeRef};

/// Position within the syntax tree
pub struct Cursor<'a> {
  root: NodeRef<'a>,
  stack: Vec<NodeRef<'a>>,
}
impl<'a> Cursor<'a> {
  /// Create a cursor positioned at the root of the tree
  pub fn new(root: &'a Node) -> Self {
    Self {
      root: NodeRef::from(root),
      stack: Vec::new(),
    }
  }

  /// The node at the current position
  pub fn current(&self) -> NodeRef<'a> {
    self.stack.last().copied().unwrap_or(self.root)
  }

  /// Move into a field holding a single node, and call `callback` positioned there.
  ///
  /// If the field is optional and not present, the callback isn't called and the
  /// default value is returned.
  pub fn into_field<T: Default>(
    &mut self,
    name: &str,
    callback: impl FnOnce(&mut Self) -> Result<T, FormatError>,
  ) -> Result<T, FormatError> {
    match self.field(name)? {
      Field::Node(node) => self.visit(node, callback),
      Field::Absent => Ok(T::default()),
      Field::List(_) => Err(self.field_not_found(name)),
    }
  }

  /// Call `callback` positioned at each node of a field holding a list, collecting the results
  pub fn map_field<T>(
    &mut self,
    name: &str,
    mut callback: impl FnMut(&mut Self) -> Result<T, FormatError>,
  ) -> Result<Vec<T>, FormatError> {
    let nodes = self.list_field(name)?;

    let mut results = Vec::with_capacity(nodes.len());
    for node in nodes {
      results.push(self.visit(node, &mut callback)?);
    }
    Ok(results)
  }

  /// Call `callback` positioned at each node of a field holding a list
  pub fn each_field(
    &mut self,
    name: &str,
    mut callback: impl FnMut(&mut Self) -> Result<(), FormatError>,
  ) -> Result<(), FormatError> {
    let nodes = self.list_field(name)?;

    nodes
      .into_iter()
      .try_for_each(|node| self.visit(node, &mut callback))
  }

  fn visit<T>(
    &mut self,
    node: NodeRef<'a>,
    callback: impl FnOnce(&mut Self) -> Result<T, FormatError>,
  ) -> Result<T, FormatError> {
    self.stack.push(node);
    let result = callback(self);
    self.stack.pop();

    result
  }

  fn field(&self, name: &str) -> Result<Field<'a>, FormatError> {
    self
      .current()
      .field(name)
      .ok_or_else(|| self.field_not_found(name))
  }

  fn list_field(&self, name: &str) -> Result<Vec<NodeRef<'a>>, FormatError> {
    match self.field(name)? {
      Field::List(nodes) => Ok(nodes),
      Field::Node(_) | Field::Absent => Err(self.field_not_found(name)),
    }
  }

  fn field_not_found(&self, name: &str) -> FormatError {
    FormatError::FieldNotFound {
      kind: self.current().kind().to_owned(),
      field: name.to_owned(),
    }
  }
}
