//! Set algebra over the tokens of two prompts

use crate::config::Delimiters;
use crate::error::{ConfigError, ExecError};
use clap::ValueEnum;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SetOperation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

/// Applies a [`SetOperation`] to the tokens of two prompts.
///
/// Tokens are trimmed, blanks dropped and duplicates collapsed onto their
/// first occurrence. Results keep the order of the first prompt, followed by
/// the second.
#[derive(Debug, Clone)]
pub struct SetCalculator {
    delimiters: Delimiters,
    operation: SetOperation,
}

impl SetCalculator {
    /// Fails when the input delimiter is empty.
    pub fn new(delimiters: Delimiters, operation: SetOperation) -> Result<Self, ConfigError> {
        delimiters.input_or_err()?;
        Ok(Self {
            delimiters,
            operation,
        })
    }

    pub fn execute(&self, first: &str, second: &str) -> Result<String, ExecError> {
        check_grouping(first)?;
        check_grouping(second)?;

        let a = self.tokens(first);
        let b = self.tokens(second);
        let in_a: HashSet<&str> = a.iter().copied().collect();
        let in_b: HashSet<&str> = b.iter().copied().collect();

        let result: Vec<&str> = match self.operation {
            SetOperation::Union => a
                .iter()
                .chain(b.iter().filter(|t| !in_a.contains(*t)))
                .copied()
                .collect(),
            SetOperation::Intersection => a.iter().filter(|t| in_b.contains(*t)).copied().collect(),
            SetOperation::Difference => a.iter().filter(|t| !in_b.contains(*t)).copied().collect(),
            SetOperation::SymmetricDifference => a
                .iter()
                .filter(|t| !in_b.contains(*t))
                .chain(b.iter().filter(|t| !in_a.contains(*t)))
                .copied()
                .collect(),
        };

        Ok(result.join(&self.delimiters.output))
    }

    fn tokens<'a>(&self, prompt: &'a str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        prompt
            .split(self.delimiters.input.as_str())
            .map(str::trim)
            .filter(|token| !token.is_empty() && seen.insert(*token))
            .collect()
    }
}

/// Fails when `(`/`)` or `[`/`]` are unbalanced. Backslash-escaped brackets
/// are ignored.
pub fn check_grouping(prompt: &str) -> Result<(), ExecError> {
    let unbalanced = || ExecError::UnbalancedGrouping {
        prompt: prompt.to_string(),
    };

    let mut open = Vec::new();
    let mut chars = prompt.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '(' | '[' => open.push(c),
            ')' => {
                if open.pop() != Some('(') {
                    return Err(unbalanced());
                }
            }
            ']' => {
                if open.pop() != Some('[') {
                    return Err(unbalanced());
                }
            }
            _ => {}
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        Err(unbalanced())
    }
}
