use owo_colors::OwoColorize;
use std::fmt;

#[derive(Debug)]
pub enum Severity {
  Error,
  Warning,
}
pub struct Message {
  pub title: String,
  pub body: String,
  pub hint: Option<String>,
  pub severity: Severity,
}
impl Message {
  pub fn error(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Error,
    }
  }
  pub fn warning(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Warning,
    }
  }
}
impl fmt::Display for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.severity {
      Severity::Error => write!(f, "{}", "✕ Error".bold().red()),
      Severity::Warning => write!(f, "{}", "⚠ Warning".bold().yellow()),
    }?;
    writeln!(f, "{} {}", ":".bold(), &self.title.bold())?;

    if !self.body.is_empty() {
      writeln!(f, "{}", &self.body)?;
    }

    if let Some(hint) = &self.hint {
      writeln!(f, "{} {}", "hint:".italic().cyan(), hint)?;
    }

    Ok(())
  }
}
impl From<&glimmer_formatter::FormatError> for Message {
  fn from(error: &glimmer_formatter::FormatError) -> Self {
    Self {
      title: error.title().to_owned(),
      body: error.message(),
      hint: None,
      severity: Severity::Error,
    }
  }
}
impl From<&serde_json::Error> for Message {
  fn from(error: &serde_json::Error) -> Self {
    Self {
      title: "Invalid Syntax Tree".to_owned(),
      body: error.to_string(),
      hint: Some("expected the JSON output of the Glimmer parser".to_owned()),
      severity: Severity::Error,
    }
  }
}
