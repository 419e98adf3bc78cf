//! The configuration options for the formatter
use std::path::Path;

/// Configuration for the formatter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// The max print width to aim for
  pub print_width: u16,
  /// The number of columns a level of indentation takes
  pub tab_width: u16,
  /// Indent with tabs instead of spaces
  pub use_tabs: bool,
  /// Use single quotes for string literals
  pub single_quote: bool,
  /// The line ending to use
  pub line_ending: LineEnding,
}
impl Default for Config {
  fn default() -> Self {
    Self {
      print_width: 80,
      tab_width: 2,
      use_tabs: false,
      single_quote: false,
      line_ending: LineEnding::Native,
    }
  }
}
impl Config {
  /// Is the file a Glimmer template, judging by its extension?
  ///
  /// # Examples
  /// ```
  /// use glimmer_formatter::FormatterConfig;
  /// use std::path::Path;
  ///
  /// assert!(FormatterConfig::is_template_path(Path::new("components/card.hbs")));
  /// assert!(!FormatterConfig::is_template_path(Path::new("styles.css")));
  /// ```
  #[must_use]
  pub fn is_template_path(path: &Path) -> bool {
    path
      .extension()
      .and_then(|extension| extension.to_str())
      .is_some_and(|extension| matches!(extension, "hbs" | "handlebars"))
  }

  /// The text for a single level of indentation
  pub(crate) fn indent_unit(self) -> String {
    if self.use_tabs {
      "\t".to_owned()
    } else {
      " ".repeat(usize::from(self.tab_width))
    }
  }
}

/// The type of line endings to use for the file
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum LineEnding {
  ///  Line Feed only (\n), common on Linux and macOS as well as inside git repos
  LineFeed,

  /// Carriage Return + Line Feed characters (\r\n), common on Windows
  CarriageReturnLineFeed,

  /// Line endings will be converted to `\n` on Unix and `\r\n` on Windows.
  #[default]
  Native,
}
impl LineEnding {
  #[inline]
  pub(super) const fn as_str(self) -> &'static str {
    match self {
      LineEnding::LineFeed => "\n",
      LineEnding::CarriageReturnLineFeed => "\r\n",

      #[cfg(not(target_os = "windows"))]
      LineEnding::Native => "\n",
      #[cfg(target_os = "windows")]
      LineEnding::Native => "\r\n",
    }
  }
}
