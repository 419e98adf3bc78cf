//! # Glimmer Fmt
//! Formats Glimmer (Handlebars) templates, from the syntax tree produced by the Glimmer parser.
//!
//! The tree is read as JSON, and the formatted template is printed.

#![allow(clippy::print_stdout)]

mod commands;
mod diagnostics;

use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Args, Parser, Subcommand};
use commands::CommandStatus;
use owo_colors::*;
use std::process;

const STYLES: Styles = Styles::styled()
  .usage(Style::new().italic())
  .header(AnsiColor::BrightYellow.on_default().bold());

fn coloured_header() -> String {
  format!(
    "{} {}",
    "Glimmer Fmt".fg::<owo_colors::colors::css::Orange>().bold(),
    "(v0.1.0)".italic().dimmed()
  )
}

fn about() -> String {
  format!(
    "{}\nAn opinionated formatter for Glimmer templates.",
    coloured_header()
  )
}

#[derive(Parser)]
#[clap(
  name = "glimmer-fmt",
  version,
  about = about(),
  styles = STYLES,
  disable_help_subcommand = true,
)]
enum App {
  /// Formats a template from its syntax tree
  #[clap(alias = "fmt")]
  Format(FormatOptions),

  /// Prints debugging information
  Print {
    #[command(subcommand)]
    command: PrintCommand,
  },
}

#[derive(Args)]
struct FormatOptions {
  /// The syntax tree to format, as JSON. Use `-` to read from STDIN
  file: String,
  /// Write the formatted template to a file, instead of printing it
  #[clap(long)]
  output: Option<String>,
  /// Check the template is already formatted. Do not write to file
  #[clap(long, value_name = "TEMPLATE")]
  check: Option<String>,

  /// Use single quotes for string literals
  #[clap(long, help_heading = "Formatting Config")]
  config_single_quote: bool,
  /// Maximum line width
  #[clap(long, default_value_t = 80, help_heading = "Formatting Config")]
  config_print_width: u16,
  /// Number of spaces per indentation level
  #[clap(long, default_value_t = 2, help_heading = "Formatting Config")]
  config_tab_width: u16,
  /// Indent with tabs instead of spaces
  #[clap(long, help_heading = "Formatting Config")]
  config_use_tabs: bool,
}

#[derive(Subcommand)]
enum PrintCommand {
  /// Displays the syntax tree
  Ast {
    /// The syntax tree to print, as JSON
    file: String,
  },
  /// Displays the intermediate document used for formatting
  Doc {
    /// The syntax tree to print, as JSON
    file: String,
  },
}

fn main() -> process::ExitCode {
  let args = App::parse();

  let result = match args {
    App::Format(options) => commands::format(&options),
    App::Print { command } => match command {
      PrintCommand::Ast { file } => commands::print_ast(&file),
      PrintCommand::Doc { file } => commands::print_doc(&file),
    },
  };

  match result {
    Ok(CommandStatus::Success) => process::ExitCode::from(0),
    Ok(CommandStatus::Failure) => process::ExitCode::from(1),
    Err(()) => process::ExitCode::from(2),
  }
}
