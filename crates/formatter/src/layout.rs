//! # Layout
//!
//! Decides where the lines of a [`Doc`] break, and converts it into a string.
//!
//! Works through a stack of commands, each a doc paired with the indentation and the
//! mode (flat or broken) to print it in. When a group is reached, the rest of the line
//! is measured with the group flat. If it fits in the print width the group is
//! printed flat, otherwise its lines break.

use crate::{config::Config, doc::Doc};
use bumpalo::Bump as Allocator;

/// Lay out the doc into a string, within the print width of the config
pub fn print(doc: &Doc<'_>, config: &Config) -> String {
  let allocator = Allocator::new();
  let mut layout = Layout {
    config,
    allocator: &allocator,
    indent_unit: config.indent_unit(),
    output: String::new(),
    column: 0,
  };

  layout.print(doc);
  layout.output
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
  Flat,
  Break,
}

#[derive(Clone, Copy)]
struct Indentation<'c> {
  text: &'c str,
  width: usize,
}

#[derive(Clone, Copy)]
enum Item<'c, 'a> {
  Doc(&'c Doc<'a>),
  /// The remaining parts of a fill
  Fill(&'c [Doc<'a>]),
}

#[derive(Clone, Copy)]
struct Command<'c, 'a> {
  indentation: Indentation<'c>,
  mode: Mode,
  item: Item<'c, 'a>,
}
impl<'c, 'a> Command<'c, 'a> {
  fn new(indentation: Indentation<'c>, mode: Mode, doc: &'c Doc<'a>) -> Self {
    Self {
      indentation,
      mode,
      item: Item::Doc(doc),
    }
  }
}

struct Layout<'c> {
  config: &'c Config,
  allocator: &'c Allocator,
  indent_unit: String,
  output: String,
  column: usize,
}
impl<'c> Layout<'c> {
  fn print<'a>(&mut self, doc: &'c Doc<'a>) {
    let root = Indentation { text: "", width: 0 };
    let mut commands = vec![Command::new(root, Mode::Break, doc)];

    while let Some(command) = commands.pop() {
      let Command {
        indentation,
        mode,
        item,
      } = command;

      let doc = match item {
        Item::Doc(doc) => doc,
        Item::Fill(parts) => {
          self.fill(indentation, mode, parts, &mut commands);
          continue;
        }
      };

      match doc {
        Doc::Empty => {}
        Doc::Text(text) => self.text(text),
        Doc::Concat(docs) => commands.extend(
          docs
            .iter()
            .rev()
            .map(|doc| Command::new(indentation, mode, doc)),
        ),
        Doc::Indent(doc) => {
          let indentation = self.indent(indentation, &self.indent_unit, self.config.tab_width);
          commands.push(Command::new(indentation, mode, doc));
        }
        Doc::Align(width, doc) => {
          let spaces = " ".repeat(usize::from(*width));
          let indentation = self.indent(indentation, &spaces, *width);
          commands.push(Command::new(indentation, mode, doc));
        }
        Doc::Group { doc, breaks } => {
          let flat = Command::new(indentation, Mode::Flat, doc);
          let broken = Command::new(indentation, Mode::Break, doc);

          if *breaks {
            commands.push(broken);
          } else if mode == Mode::Flat || self.fits(&[flat], &commands, false) {
            commands.push(flat);
          } else {
            commands.push(broken);
          }
        }
        Doc::Fill(parts) => commands.push(Command {
          indentation,
          mode,
          item: Item::Fill(parts),
        }),
        Doc::IfBreak(broken, flat) => {
          let doc = if mode == Mode::Break { broken } else { flat };
          commands.push(Command::new(indentation, mode, doc));
        }
        Doc::Line if mode == Mode::Flat => self.text(" "),
        Doc::SoftLine if mode == Mode::Flat => {}
        Doc::Line | Doc::SoftLine | Doc::HardLine => self.new_line(indentation),
      }
    }
  }

  /// Lay out the first content of a fill, and the separator after it.
  ///
  /// The content is printed flat if it fits. The separator is printed flat if the
  /// content after it would also fit on the line, otherwise it breaks.
  fn fill<'a>(
    &self,
    indentation: Indentation<'c>,
    mode: Mode,
    parts: &'c [Doc<'a>],
    commands: &mut Vec<Command<'c, 'a>>,
  ) {
    let [content, rest @ ..] = parts else {
      return;
    };

    let content_flat = Command::new(indentation, Mode::Flat, content);
    let content_break = Command::new(indentation, Mode::Break, content);
    let content_fits = self.fits(&[content_flat], &[], true);

    let [separator, remaining @ ..] = rest else {
      commands.push(if content_fits { content_flat } else { content_break });
      return;
    };

    let separator_flat = Command::new(indentation, Mode::Flat, separator);
    let separator_break = Command::new(indentation, Mode::Break, separator);

    let Some(next_content) = remaining.first() else {
      if content_fits {
        commands.extend([separator_flat, content_flat]);
      } else {
        commands.extend([separator_break, content_break]);
      }
      return;
    };

    commands.push(Command {
      indentation,
      mode,
      item: Item::Fill(remaining),
    });

    let both_fit = self.fits(
      &[
        content_flat,
        separator_flat,
        Command::new(indentation, Mode::Flat, next_content),
      ],
      &[],
      true,
    );

    if both_fit {
      commands.extend([separator_flat, content_flat]);
    } else if content_fits {
      commands.extend([separator_break, content_flat]);
    } else {
      commands.extend([separator_break, content_break]);
    }
  }

  /// Will the commands fit on the rest of the current line?
  ///
  /// Once `next` is measured, continues with the pending commands in `rest` until the
  /// end of the line is reached.
  fn fits<'a>(
    &self,
    next: &[Command<'c, 'a>],
    rest: &[Command<'c, 'a>],
    must_be_flat: bool,
  ) -> bool {
    let mut width = to_isize(usize::from(self.config.print_width)) - to_isize(self.column);
    let mut rest = rest.iter().rev();
    let mut stack = Vec::new();
    next
      .iter()
      .rev()
      .for_each(|command| push_command(&mut stack, command));

    while width >= 0 {
      let Some((mode, doc)) = stack.pop() else {
        match rest.next() {
          Some(command) => {
            push_command(&mut stack, command);
            continue;
          }
          None => return true,
        }
      };

      match doc {
        Doc::Empty => {}
        Doc::Text(text) => width -= to_isize(text_width(text)),
        Doc::Concat(docs) | Doc::Fill(docs) => stack.extend(docs.iter().rev().map(|doc| (mode, doc))),
        Doc::Indent(doc) | Doc::Align(_, doc) => stack.push((mode, &**doc)),
        Doc::Group { doc, breaks } => {
          if must_be_flat && *breaks {
            return false;
          }
          stack.push((if *breaks { Mode::Break } else { mode }, &**doc));
        }
        Doc::IfBreak(broken, flat) => {
          let doc = if mode == Mode::Break { broken } else { flat };
          stack.push((mode, &**doc));
        }
        Doc::Line if mode == Mode::Flat => width -= 1,
        Doc::SoftLine if mode == Mode::Flat => {}
        Doc::Line | Doc::SoftLine | Doc::HardLine => return true,
      }
    }

    false
  }

  fn text(&mut self, text: &str) {
    self.output.push_str(text);
    self.column += text_width(text);
  }

  fn new_line(&mut self, indentation: Indentation<'_>) {
    let trimmed_length = self.output.trim_end_matches([' ', '\t']).len();
    self.output.truncate(trimmed_length);

    self.output.push_str(self.config.line_ending.as_str());
    self.output.push_str(indentation.text);
    self.column = indentation.width;
  }

  fn indent(&self, indentation: Indentation<'c>, unit: &str, width: u16) -> Indentation<'c> {
    let mut text = bumpalo::collections::String::from_str_in(indentation.text, self.allocator);
    text.push_str(unit);

    Indentation {
      text: text.into_bump_str(),
      width: indentation.width + usize::from(width),
    }
  }
}

/// Add a command to the stack used when measuring, expanding the rest of a fill
fn push_command<'c, 'a>(stack: &mut Vec<(Mode, &'c Doc<'a>)>, command: &Command<'c, 'a>) {
  match command.item {
    Item::Doc(doc) => stack.push((command.mode, doc)),
    Item::Fill(parts) => stack.extend(parts.iter().rev().map(|doc| (command.mode, doc))),
  }
}

fn text_width(text: &str) -> usize {
  text.chars().count()
}

fn to_isize(width: usize) -> isize {
  isize::try_from(width).unwrap_or(isize::MAX)
}
