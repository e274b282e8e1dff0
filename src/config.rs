// Configuration for the tag lookup engine and interactive sessions

use crate::error::ConfigError;
use tracing::Level;

/// Delimiter set used when splitting and re-joining prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Splits a prompt into tokens (default ",")
    pub input: String,

    /// Joins formatted records back into one line (default "\n")
    pub output: String,

    /// Joins a token with its looked-up count inside one record (default ",")
    pub field: Option<String>,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            input: ",".to_string(),
            output: "\n".to_string(),
            field: Some(",".to_string()),
        }
    }
}

impl Delimiters {
    pub fn new(input: impl Into<String>, output: impl Into<String>, field: Option<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            field,
        }
    }

    /// Returns the input delimiter, failing when it is empty.
    pub fn input_or_err(&self) -> Result<&str, ConfigError> {
        if self.input.is_empty() {
            return Err(ConfigError::EmptyInputDelimiter);
        }
        Ok(&self.input)
    }

    /// Returns the field separator, failing when it is unset or empty.
    pub fn field_or_err(&self) -> Result<&str, ConfigError> {
        match self.field.as_deref() {
            Some(field) if !field.is_empty() => Ok(field),
            _ => Err(ConfigError::MissingFieldSeparator),
        }
    }
}

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Label shown while waiting for the first line of a prompt (default ">>> ")
    pub ps1: String,

    /// Label shown for continuation lines (default "... ")
    pub ps2: String,

    /// Whether the startup banner is written in interactive mode
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ps1: ">>> ".to_string(),
            ps2: "... ".to_string(),
            banner: true,
        }
    }
}

/// Maps the number of `-v` flags to a log level.
pub fn log_level_from(verbose: u8) -> Result<Level, ConfigError> {
    match verbose {
        0 => Ok(Level::WARN),
        1 => Ok(Level::INFO),
        2 => Ok(Level::DEBUG),
        n => Err(ConfigError::Verbosity(n)),
    }
}
