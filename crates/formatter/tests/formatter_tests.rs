//! # Formatter Tests
//!
//! Check that the output of the formatter matches the expected output.

use glimmer_formatter::{
  FormatError,
  config::{Config, LineEnding},
};
use glimmer_syntax::Node;
use glimmer_syntax::ast::{Hash, MustacheStatement, PathExpression, Program, TextNode};
use indoc::indoc;
use serde_json::{Value, json};

fn config(print_width: u16) -> Config {
  Config {
    print_width,
    line_ending: LineEnding::LineFeed,
    ..Config::default()
  }
}

fn format_with(tree: Value, config: Config) -> Result<String, FormatError> {
  let tree: Node = serde_json::from_value(tree).unwrap();
  glimmer_formatter::format(&tree, config)
}

fn format(tree: Value, print_width: u16) -> String {
  format_with(tree, config(print_width)).unwrap()
}

macro_rules! assert_format {
  ($tree:expr, $expected:expr) => {
    assert_format!($tree, $expected, 80);
  };
  ($tree:expr, $expected:expr, $print_width:expr) => {
    assert_eq!(format($tree, $print_width), $expected);
  };
}

fn program(body: Value) -> Value {
  json!({ "type": "Program", "body": body })
}

fn text(chars: &str) -> Value {
  json!({ "type": "TextNode", "chars": chars })
}

fn path(original: &str) -> Value {
  let parts: Vec<&str> = original.split('.').collect();
  json!({ "type": "PathExpression", "original": original, "parts": parts })
}

fn string(value: &str) -> Value {
  json!({ "type": "StringLiteral", "value": value })
}

fn pair(key: &str, value: Value) -> Value {
  json!({ "type": "HashPair", "key": key, "value": value })
}

fn hash(pairs: Value) -> Value {
  json!({ "type": "Hash", "pairs": pairs })
}

fn mustache(name: &str, params: Value, pairs: Value) -> Value {
  json!({
    "type": "MustacheStatement",
    "path": path(name),
    "params": params,
    "hash": hash(pairs),
  })
}

fn attribute(name: &str, value: Value) -> Value {
  json!({ "type": "AttrNode", "name": name, "value": value })
}

fn element(tag: &str, attributes: Value, children: Value) -> Value {
  json!({
    "type": "ElementNode",
    "tag": tag,
    "attributes": attributes,
    "children": children,
  })
}

fn block(name: &str, params: Value, body: Value, inverse: Option<Value>) -> Value {
  let mut block = json!({
    "type": "BlockStatement",
    "path": path(name),
    "params": params,
    "hash": hash(json!([])),
    "program": program(body),
  });
  if let Some(inverse) = inverse {
    block["inverse"] = program(inverse);
  }
  block
}

#[test]
fn empty_template() {
  assert_format!(program(json!([])), "");
  assert_format!(program(json!([text("  \n\t "), text("\n")])), "");
}

#[test]
fn text_is_reflowed() {
  assert_format!(program(json!([text("  Hello \n   world  ")])), "Hello world\n");
  assert_format!(
    program(json!([text("one two three four five six")])),
    indoc! {"
      one two
      three four
      five six
    "},
    10
  );
}

#[test]
fn mustaches() {
  assert_format!(program(json!([mustache("foo", json!([]), json!([]))])), "{{foo}}\n");
  assert_format!(
    program(json!([mustache("user.name", json!([]), json!([]))])),
    "{{user.name}}\n"
  );

  let mut unescaped = mustache("foo", json!([]), json!([]));
  unescaped["escaped"] = json!(false);
  assert_format!(program(json!([unescaped])), "{{{foo}}}\n");
}

#[test]
fn literals() {
  let params = json!([
    { "type": "NumberLiteral", "value": 1.5 },
    { "type": "NumberLiteral", "value": 2 },
    { "type": "BooleanLiteral", "value": true },
    { "type": "NullLiteral" },
  ]);

  assert_format!(
    program(json!([mustache("format", params, json!([]))])),
    "{{format 1.5 2 true null}}\n"
  );
}

#[test]
fn string_quotes() {
  let tree = || program(json!([mustache("t", json!([string("hello")]), json!([]))]));

  assert_format!(tree(), "{{t \"hello\"}}\n");

  let single_quote = Config {
    single_quote: true,
    ..config(80)
  };
  assert_eq!(format_with(tree(), single_quote).unwrap(), "{{t 'hello'}}\n");

  assert_format!(
    program(json!([mustache("t", json!([string("it's")]), json!([]))])),
    "{{t it's}}\n"
  );
}

#[test]
fn sub_expressions() {
  let query = json!({
    "type": "SubExpression",
    "path": path("query-params"),
    "params": [],
    "hash": hash(json!([pair("page", json!({ "type": "NumberLiteral", "value": 1 }))])),
  });
  let link = mustache(
    "link-to",
    json!([string("Home"), query]),
    json!([pair("class", string("nav"))]),
  );

  assert_format!(
    program(json!([link])),
    "{{link-to \"Home\" (query-params page=1) class=\"nav\"}}\n"
  );
}

#[test]
fn params_and_hash_break_separately() {
  let tree = || {
    program(json!([mustache(
      "my-helper",
      json!([string("first argument"), string("second argument")]),
      json!([pair("key", string("value"))]),
    )]))
  };

  assert_format!(
    tree(),
    indoc! {r#"
      {{my-helper
        "first argument"
        "second argument" key="value"}}
    "#},
    40
  );
  assert_format!(
    tree(),
    indoc! {r#"
      {{my-helper
        "first argument"
        "second argument"
        key="value"}}
    "#},
    30
  );
}

#[test]
fn sub_expressions_break() {
  let concat = json!({
    "type": "SubExpression",
    "path": path("concat"),
    "params": [string("aaaaaaaaaa"), string("bbbbbbbbbb")],
  });

  assert_format!(
    program(json!([mustache("helper", json!([concat]), json!([]))])),
    indoc! {r#"
      {{helper
        (concat
          "aaaaaaaaaa"
          "bbbbbbbbbb"
        )}}
    "#},
    20
  );
}

#[test]
fn numbers() {
  let params = json!([
    { "type": "NumberLiteral", "value": 1e21 },
    { "type": "NumberLiteral", "value": -0.0 },
    { "type": "NumberLiteral", "value": 0.1 },
    { "type": "NumberLiteral", "value": 0.000_000_15 },
    { "type": "NumberLiteral", "value": -3 },
  ]);

  assert_format!(
    program(json!([mustache("f", params, json!([]))])),
    "{{f 1e+21 0 0.1 1.5e-7 -3}}\n"
  );
}

#[test]
fn comments() {
  let comment = json!({ "type": "MustacheCommentStatement", "value": " some   comment " });
  assert_format!(program(json!([comment])), "{{! some comment }}\n");

  let comment = json!({
    "type": "MustacheCommentStatement",
    "value": " this comment is far too long to fit ",
  });
  assert_format!(
    program(json!([comment])),
    indoc! {"
      {{!
        this comment is
        far too long to
        fit
      }}
    "},
    20
  );
}

#[test]
fn elements() {
  assert_format!(program(json!([element("div", json!([]), json!([]))])), "<div></div>\n");
  assert_format!(
    program(json!([element("div", json!([]), json!([text("  \n  ")]))])),
    "<div></div>\n"
  );
  assert_format!(
    program(json!([element(
      "div",
      json!([attribute("class", text("a"))]),
      json!([text("  hello \n  world  ")]),
    )])),
    "<div class=\"a\">hello world</div>\n"
  );
}

#[test]
fn void_elements() {
  assert_format!(program(json!([element("br", json!([]), json!([]))])), "<br />\n");
  assert_format!(
    program(json!([element("br", json!([]), json!([text("hi")]))])),
    "<br>hi</br>\n"
  );
  assert_format!(
    program(json!([element(
      "img",
      json!([attribute("src", mustache("url", json!([]), json!([])))]),
      json!([]),
    )])),
    "<img src={{url}} />\n"
  );
}

#[test]
fn concat_attributes() {
  let value = json!({
    "type": "ConcatStatement",
    "parts": [text("a "), mustache("b", json!([]), json!([])), text(" c")],
  });
  let tree = || {
    program(json!([element(
      "div",
      json!([attribute("class", value.clone())]),
      json!([]),
    )]))
  };

  assert_format!(tree(), "<div class=\"a {{b}} c\"></div>\n");

  let single_quote = Config {
    single_quote: true,
    ..config(80)
  };
  assert_eq!(
    format_with(tree(), single_quote).unwrap(),
    "<div class=\"a {{b}} c\"></div>\n"
  );
}

#[test]
fn element_modifiers() {
  let modifier = json!({
    "type": "ElementModifierStatement",
    "path": path("action"),
    "params": [string("save")],
    "hash": hash(json!([])),
  });
  let mut button = element("button", json!([]), json!([text("Save")]));
  button["modifiers"] = json!([modifier]);

  assert_format!(
    program(json!([button])),
    "<button {{action \"save\"}}>Save</button>\n"
  );
}

#[test]
fn attributes_and_modifiers_wrap() {
  let modifier = json!({
    "type": "ElementModifierStatement",
    "path": path("on"),
    "params": [string("click"), path("this.save")],
  });
  let mut button = element(
    "button",
    json!([attribute("class", text("primary"))]),
    json!([text("Save")]),
  );
  button["modifiers"] = json!([modifier]);

  assert_format!(
    program(json!([button.clone()])),
    "<button class=\"primary\" {{on \"click\" this.save}}>Save</button>\n"
  );
  assert_format!(
    program(json!([button])),
    indoc! {r#"
      <button class="primary"
              {{on "click" this.save}}>
        Save
      </button>
    "#},
    40
  );
}

#[test]
fn attributes_wrap_aligned() {
  let div = element(
    "div",
    json!([
      attribute("class", text("card")),
      attribute("id", text("main")),
    ]),
    json!([]),
  );

  assert_format!(
    program(json!([div])),
    indoc! {r#"
      <div class="card"
           id="main">
      </div>
    "#},
    20
  );
}

#[test]
fn blocks() {
  let cond = json!([path("cond")]);

  assert_format!(
    program(json!([block("if", cond.clone(), json!([text("yes")]), None)])),
    indoc! {"
      {{#if cond}}
        yes
      {{/if}}
    "}
  );
  assert_format!(
    program(json!([block(
      "if",
      cond.clone(),
      json!([text("yes")]),
      Some(json!([text("no")])),
    )])),
    indoc! {"
      {{#if cond}}
        yes
      {{else}}
        no
      {{/if}}
    "}
  );
  assert_format!(
    program(json!([block("if", json!([path("a")]), json!([]), None)])),
    indoc! {"
      {{#if a}}
      {{/if}}
    "}
  );
}

#[test]
fn empty_inverse() {
  assert_format!(
    program(json!([block(
      "if",
      json!([path("a")]),
      json!([text("yes")]),
      Some(json!([])),
    )])),
    indoc! {"
      {{#if a}}
        yes
      {{else}}
      {{/if}}
    "}
  );
}

#[test]
fn whitespace_only_block_bodies() {
  assert_format!(
    program(json!([block(
      "if",
      json!([path("a")]),
      json!([text("  \n  ")]),
      Some(json!([text(" ")])),
    )])),
    indoc! {"
      {{#if a}}
      {{else}}
      {{/if}}
    "}
  );
}

#[test]
fn block_params() {
  let mut each = block(
    "each",
    json!([path("items")]),
    json!([mustache("item", json!([]), json!([]))]),
    None,
  );
  each["program"]["blockParams"] = json!(["item"]);

  assert_format!(
    program(json!([each])),
    indoc! {"
      {{#each items as |item|}}
        {{item}}
      {{/each}}
    "}
  );
}

#[test]
fn nested_alignment() {
  let input = element(
    "input",
    json!([
      attribute("type", text("checkbox")),
      attribute("checked", mustache("done", json!([]), json!([]))),
    ]),
    json!([]),
  );

  assert_format!(
    program(json!([block("if", json!([path("show")]), json!([input]), None)])),
    indoc! {r#"
      {{#if show}}
        <input type="checkbox"
               checked={{done}} />
      {{/if}}
    "#},
    30
  );
}

#[test]
fn markup_starts_new_lines() {
  assert_format!(
    program(json!([text("a"), text("b")])),
    indoc! {"
      a
      b
    "}
  );
  assert_format!(
    program(json!([element(
      "p",
      json!([]),
      json!([text("Hello "), mustache("name", json!([]), json!([]))]),
    )])),
    indoc! {"
      <p>
        Hello
        {{name}}
      </p>
    "}
  );
}

#[test]
fn idempotent() {
  let messy = program(json!([
    text("\n  "),
    element(
      "div",
      json!([attribute("class", text("a"))]),
      json!([text("  hello \n  world  ")]),
    ),
    text("\n"),
  ]));
  let formatted = program(json!([
    element(
      "div",
      json!([attribute("class", text("a"))]),
      json!([text("hello world")]),
    ),
    text("\n"),
  ]));

  let output = format(messy, 80);
  assert_eq!(output, "<div class=\"a\">hello world</div>\n");
  assert_eq!(format(formatted, 80), output);
}

#[test]
fn idempotent_blocks() {
  let paragraph = |chars: &str| element("p", json!([]), json!([text(chars)]));
  let messy = program(json!([block(
    "if",
    json!([path("cond")]),
    json!([text("\n\n      "), paragraph("  hi  "), text("   ")]),
    Some(json!([text("\n"), mustache("fallback", json!([]), json!([])), text("\n\n")])),
  )]));

  let output = format(messy, 80);
  assert_eq!(
    output,
    indoc! {"
      {{#if cond}}
        <p>hi</p>
      {{else}}
        {{fallback}}
      {{/if}}
    "}
  );

  // The tree the parser gives for the output above
  let formatted = program(json!([
    block(
      "if",
      json!([path("cond")]),
      json!([text("\n  "), paragraph("hi"), text("\n")]),
      Some(json!([text("\n  "), mustache("fallback", json!([]), json!([])), text("\n")])),
    ),
    text("\n"),
  ]));
  assert_eq!(format(formatted, 80), output);
}

#[test]
fn trees_built_in_rust() {
  let greeting = Node::MustacheStatement(MustacheStatement {
    path: PathExpression::new("user.name"),
    params: Vec::new(),
    hash: Hash::default(),
    escaped: true,
  });
  let tree = Node::Program(Program {
    body: vec![
      Node::TextNode(TextNode::new("Hello ")),
      greeting,
      Node::TextNode(TextNode::new("\n")),
    ],
    block_params: Vec::new(),
  });

  let output = glimmer_formatter::format(&tree, config(80)).unwrap();
  assert_eq!(output, "Hello\n{{user.name}}\n");
}

#[test]
fn config_indentation() {
  let tree = || program(json!([block("if", json!([path("a")]), json!([text("yes")]), None)]));

  let tabs = Config {
    use_tabs: true,
    ..config(80)
  };
  assert_eq!(
    format_with(tree(), tabs).unwrap(),
    "{{#if a}}\n\tyes\n{{/if}}\n"
  );

  let wide = Config {
    tab_width: 4,
    ..config(80)
  };
  assert_eq!(
    format_with(tree(), wide).unwrap(),
    "{{#if a}}\n    yes\n{{/if}}\n"
  );
}

#[test]
fn config_line_ending() {
  let tree = program(json!([block("if", json!([path("a")]), json!([text("yes")]), None)]));
  let config = Config {
    line_ending: LineEnding::CarriageReturnLineFeed,
    ..config(80)
  };

  assert_eq!(
    format_with(tree, config).unwrap(),
    "{{#if a}}\r\n  yes\r\n{{/if}}\r\n"
  );
}

#[test]
fn unsupported_nodes() {
  let tree = program(json!([
    text("a"),
    mustache("b", json!([{ "type": "UndefinedLiteral" }]), json!([])),
  ]));

  let error = format_with(tree, config(80)).unwrap_err();
  assert_eq!(
    error,
    FormatError::UnsupportedNodeKind {
      kind: "UndefinedLiteral".into()
    }
  );
  assert_eq!(error.title(), "Unsupported Node Kind");
  assert_eq!(
    error.to_string(),
    "unknown glimmer node type `UndefinedLiteral`, it can't be formatted"
  );
}

#[test]
fn config_defaults() {
  let config = Config::default();

  assert_eq!(config.print_width, 80);
  assert_eq!(config.tab_width, 2);
  assert!(!config.use_tabs);
  assert!(!config.single_quote);
  assert!(Config::is_template_path("app/templates/index.hbs".as_ref()));
  assert!(Config::is_template_path("index.handlebars".as_ref()));
  assert!(!Config::is_template_path("index.html".as_ref()));
}
