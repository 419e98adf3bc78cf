use crate::ast::*;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::de::value::MapAccessDeserializer;
use serde_json::{Map, Value};
use std::fmt;

impl<'de> Deserialize<'de> for Node {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(NodeVisitor)
  }
}

struct NodeVisitor;
impl<'de> Visitor<'de> for NodeVisitor {
  type Value = Node;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a glimmer node tagged with its `type`")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
    let Some(key) = map.next_key::<String>()? else {
      return Err(de::Error::missing_field("type"));
    };

    // The parser writes the tag first, so the rest of the fields stream straight into the node
    if key == "type" {
      let kind: String = map.next_value()?;
      return from_fields(&kind, MapAccessDeserializer::new(map));
    }

    let mut fields = Map::new();
    fields.insert(key, map.next_value()?);
    while let Some((key, value)) = map.next_entry::<String, Value>()? {
      fields.insert(key, value);
    }

    let kind = match fields.remove("type") {
      Some(Value::String(kind)) => kind,
      Some(_) => return Err(de::Error::custom("node `type` should be a string")),
      None => return Err(de::Error::missing_field("type")),
    };
    from_fields(&kind, Value::Object(fields)).map_err(de::Error::custom)
  }
}

/// Build the node of the given kind from the fields other than its tag
///
/// Kinds which are not known keep only their tag, their fields are skipped.
fn from_fields<'de, D: Deserializer<'de>>(kind: &str, fields: D) -> Result<Node, D::Error> {
  Ok(match kind {
    "Program" => Node::Program(Program::deserialize(fields)?),
    "ElementNode" => Node::ElementNode(ElementNode::deserialize(fields)?),
    "AttrNode" => Node::AttrNode(AttrNode::deserialize(fields)?),
    "BlockStatement" => Node::BlockStatement(BlockStatement::deserialize(fields)?),
    "MustacheStatement" => Node::MustacheStatement(MustacheStatement::deserialize(fields)?),
    "MustacheCommentStatement" => {
      Node::MustacheCommentStatement(MustacheCommentStatement::deserialize(fields)?)
    }
    "ElementModifierStatement" => {
      Node::ElementModifierStatement(ElementModifierStatement::deserialize(fields)?)
    }
    "SubExpression" => Node::SubExpression(SubExpression::deserialize(fields)?),
    "PathExpression" => Node::PathExpression(PathExpression::deserialize(fields)?),
    "Hash" => Node::Hash(Hash::deserialize(fields)?),
    "HashPair" => Node::HashPair(HashPair::deserialize(fields)?),
    "ConcatStatement" => Node::ConcatStatement(ConcatStatement::deserialize(fields)?),
    "TextNode" => Node::TextNode(TextNode::deserialize(fields)?),
    "StringLiteral" => Node::StringLiteral(StringLiteral::deserialize(fields)?),
    "NumberLiteral" => Node::NumberLiteral(NumberLiteral::deserialize(fields)?),
    "BooleanLiteral" => Node::BooleanLiteral(BooleanLiteral::deserialize(fields)?),
    "NullLiteral" => Node::NullLiteral(NullLiteral::deserialize(fields)?),
    _ => {
      IgnoredAny::deserialize(fields)?;
      Node::Unsupported(UnsupportedNode {
        kind: kind.to_owned(),
      })
    }
  })
}
