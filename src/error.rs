use std::io;
use thiserror::Error;

/// Invalid startup configuration. Never retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("field number must be 1 or more (key: {key}, value: {value})")]
    FieldIndexOutOfRange { key: usize, value: usize },

    #[error("impossible to specify the same field number: {0}")]
    SameFieldIndex(usize),

    #[error("row delimiter must not be empty")]
    EmptyRowDelimiter,

    #[error("input delimiter must not be empty")]
    EmptyInputDelimiter,

    #[error("field separator is not set")]
    MissingFieldSeparator,

    #[error("no formatter applicable: {0}")]
    UnknownFormatter(String),

    #[error("at most two -v flags can be given, got {0}")]
    Verbosity(u8),
}

/// Failure while building a tag table from tabular input.
#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("row {line}: failed to get field {needed}, the row has only {found} field(s)")]
    MalformedRow {
        line: usize,
        needed: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure raised by an execution callback. Interactive sessions log it and
/// keep going.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExecError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unbalanced grouping in {prompt:?}")]
    UnbalancedGrouping { prompt: String },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read history file: {0}")]
    History(String),
}
