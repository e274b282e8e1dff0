use super::format::Dialect;
use super::table::TagTable;
use crate::config::Delimiters;
use crate::error::{ConfigError, ExecError};

/// Count shown for tags missing from the table
pub const MISSING_COUNT: &str = "NULL";

/// Annotates every token of a prompt with its count from a [`TagTable`].
#[derive(Debug, Clone)]
pub struct TokenFinder {
    delimiters: Delimiters,
    dialect: Dialect,
}

impl TokenFinder {
    /// Fails when the input delimiter is empty or the field separator is
    /// unset or empty.
    pub fn new(delimiters: Delimiters, dialect: Dialect) -> Result<Self, ConfigError> {
        delimiters.input_or_err()?;
        delimiters.field_or_err()?;
        Ok(Self {
            delimiters,
            dialect,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Splits `prompt` on the input delimiter and joins one
    /// `token<field>count` record per token with the output delimiter.
    ///
    /// A token that is blank after trimming ends the line: the tokens after
    /// it are not processed.
    pub fn execute(&self, prompt: &str, table: &TagTable) -> Result<String, ExecError> {
        let field = self.delimiters.field_or_err()?;

        let mut records = Vec::new();
        for token in prompt.split(self.delimiters.input.as_str()) {
            let token = token.trim();
            if token.is_empty() {
                break;
            }

            let count = table.get(token).unwrap_or(MISSING_COUNT);
            let formatted = self.dialect.format(token);
            records.push([formatted.as_str(), count].join(field));
        }

        Ok(records.join(&self.delimiters.output))
    }
}
