use crate::doc::Doc;
use bumpalo::{Bump as Allocator, collections::Vec};

/// Split text into words which can be wrapped independently.
///
/// Runs of whitespace become a single [`Doc::Line`], so the words are joined by a
/// space, or wrapped onto the next line when they don't fit.
pub fn word_wrap<'a>(text: &'a str, allocator: &'a Allocator) -> Doc<'a> {
  let mut parts = Vec::new_in(allocator);

  for word in text.split_whitespace() {
    if !parts.is_empty() {
      parts.push(Doc::Line);
    }
    parts.push(Doc::Text(word));
  }

  Doc::Fill(parts)
}
