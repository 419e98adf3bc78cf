use super::FormatOptions;
use super::diagnostics::{Message, Severity};

use glimmer_formatter::FormatterConfig;
use glimmer_syntax::Node;

use anstream::{eprintln, print, println};
use std::fs;
use std::path::Path;

pub enum CommandStatus {
  /// Command was successful
  Success,
  /// Command ran, but the check it made failed
  Failure,
}

fn read_file(filename: &str) -> Result<String, ()> {
  if filename == "-" {
    return read_stdin();
  }

  match fs::read_to_string(filename) {
    Ok(file) if file.is_empty() => {
      eprintln!("{}", Message::warning(format!("Empty file `{filename}`")));
      Err(())
    }
    Ok(file) => Ok(file),
    Err(_) => {
      eprintln!("{}", Message::error(format!("File not found `{filename}`")));
      Err(())
    }
  }
}

fn read_stdin() -> Result<String, ()> {
  use std::io::{self, Read};

  let mut buffer = String::new();
  let mut stdin = io::stdin().lock();

  match stdin.read_to_string(&mut buffer) {
    Ok(_) => Ok(buffer),
    Err(_) => {
      eprintln!("{}", Message::error("Problem Reading from STDIN".into()));
      Err(())
    }
  }
}

fn load(filename: &str) -> Result<Node, ()> {
  let source = read_file(filename)?;

  glimmer_syntax::from_json(&source).map_err(|error| {
    eprintln!("{}", Message::from(&error));
  })
}

pub fn format(options: &FormatOptions) -> Result<CommandStatus, ()> {
  let config = FormatterConfig {
    print_width: options.config_print_width,
    tab_width: options.config_tab_width,
    use_tabs: options.config_use_tabs,
    single_quote: options.config_single_quote,
    ..FormatterConfig::default()
  };

  let tree = load(&options.file)?;
  let formatted_source = glimmer_formatter::format(&tree, config).map_err(|error| {
    eprintln!("{}", Message::from(&error));
  })?;

  if let Some(template) = &options.check {
    let Ok(source) = fs::read_to_string(template) else {
      eprintln!("{}", Message::error(format!("File not found `{template}`")));
      return Err(());
    };

    if formatted_source != source {
      eprintln!("{}", Message {
        title: "File is not formatted".into(),
        body: format!("`{template}` is not formatted"),
        hint: None,
        severity: Severity::Error,
      });
      return Ok(CommandStatus::Failure);
    }
    return Ok(CommandStatus::Success);
  }

  match &options.output {
    Some(output) => {
      if !FormatterConfig::is_template_path(Path::new(output)) {
        eprintln!("{}", Message {
          title: format!("`{output}` is not a template file"),
          body: String::new(),
          hint: Some("templates use the `.hbs` or `.handlebars` extension".into()),
          severity: Severity::Warning,
        });
      }

      if fs::write(output, formatted_source).is_err() {
        eprintln!("{}", Message::error("Problem writing to file".into()));
        return Err(());
      }
    }
    None => print!("{formatted_source}"),
  }

  Ok(CommandStatus::Success)
}

pub fn print_ast(filename: &str) -> Result<CommandStatus, ()> {
  let tree = load(filename)?;

  let filename = if filename == "-" { "STDIN" } else { filename };
  println!("╭─[Syntax Tree: {filename}]");
  println!("{tree:#?}");
  println!("╯");

  Ok(CommandStatus::Success)
}

pub fn print_doc(filename: &str) -> Result<CommandStatus, ()> {
  let tree = load(filename)?;
  let doc = glimmer_formatter::debug_document(&tree, FormatterConfig::default()).map_err(|error| {
    eprintln!("{}", Message::from(&error));
  })?;

  let filename = if filename == "-" { "STDIN" } else { filename };
  println!("╭─[Document: {filename}]");
  println!("{doc}");
  println!("╯");

  Ok(CommandStatus::Success)
}
