//! Output dialects for looked-up tokens
//!
//! - `csv` → token unchanged
//! - `a1111` → `(` and `)` escaped with a backslash
//! - `a1111compat` → `a1111`, then unescaped `[` and `]` escaped as well

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Csv,
    A1111,
    A1111Compat,
}

impl Dialect {
    pub const CHOICES: [&'static str; 3] = ["a1111", "a1111compat", "csv"];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Csv => "csv",
            Dialect::A1111 => "a1111",
            Dialect::A1111Compat => "a1111compat",
        }
    }

    pub fn format(&self, token: &str) -> String {
        match self {
            Dialect::Csv => plain(token),
            Dialect::A1111 => parenthesis_escaped(token),
            Dialect::A1111Compat => fully_escaped(token),
        }
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Dialect::Csv),
            "a1111" => Ok(Dialect::A1111),
            "a1111compat" => Ok(Dialect::A1111Compat),
            other => Err(ConfigError::UnknownFormatter(other.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn plain(token: &str) -> String {
    token.to_string()
}

/// Prefixes every `(` and `)` with a backslash, e.g. `a (b)` → `a \(b\)`.
pub fn parenthesis_escaped(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len() + 2);
    for c in token.chars() {
        if c == '(' || c == ')' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn fully_escaped(token: &str) -> String {
    escape_brackets(&parenthesis_escaped(token))
}

/// Escapes the attention brackets `[` and `]` unless a backslash already
/// escapes them.
pub fn escape_brackets(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut after_backslash = false;
    for c in text.chars() {
        if (c == '[' || c == ']') && !after_backslash {
            escaped.push('\\');
        }
        escaped.push(c);
        after_backslash = c == '\\' && !after_backslash;
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_identity() {
        for token in ["", "cat", "a (b)", "\\[x]", "long hair"] {
            assert_eq!(plain(token), token);
        }
    }

    #[test]
    fn test_parenthesis_escaped() {
        assert_eq!(parenthesis_escaped("sailor (azur lane)"), "sailor \\(azur lane\\)");
        assert_eq!(parenthesis_escaped("no parens"), "no parens");
    }

    #[test]
    fn test_parenthesis_escaped_adds_one_backslash_per_paren() {
        for token in ["(a)", "((x))", "a(b", ")", "\\(already"] {
            let parens = token.chars().filter(|c| *c == '(' || *c == ')').count();
            let before = token.matches('\\').count();
            let escaped = parenthesis_escaped(token);
            assert_eq!(escaped.matches('\\').count() - before, parens);

            let chars: Vec<char> = escaped.chars().collect();
            for (i, c) in chars.iter().enumerate() {
                if *c == '(' || *c == ')' {
                    assert!(i > 0 && chars[i - 1] == '\\', "unescaped paren in {escaped}");
                }
            }
        }
    }

    #[test]
    fn test_escape_brackets_skips_escaped() {
        assert_eq!(escape_brackets("[a]"), "\\[a\\]");
        assert_eq!(escape_brackets("\\[a\\]"), "\\[a\\]");
        assert_eq!(escape_brackets("\\\\[a]"), "\\\\\\[a\\]");
    }

    #[test]
    fn test_fully_escaped() {
        assert_eq!(fully_escaped("a (b) [c]"), "a \\(b\\) \\[c\\]");
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("csv".parse::<Dialect>(), Ok(Dialect::Csv));
        assert_eq!("a1111".parse::<Dialect>(), Ok(Dialect::A1111));
        assert_eq!("a1111compat".parse::<Dialect>(), Ok(Dialect::A1111Compat));
        assert_eq!(
            "json".parse::<Dialect>(),
            Err(ConfigError::UnknownFormatter("json".to_string()))
        );
    }

    #[test]
    fn test_dialect_format_dispatch() {
        assert_eq!(Dialect::Csv.format("(x)"), "(x)");
        assert_eq!(Dialect::A1111.format("(x)"), "\\(x\\)");
        assert_eq!(Dialect::A1111Compat.format("[(x)]"), "\\[\\(x\\)\\]");
    }

    #[test]
    fn test_choices_round_trip_names() {
        for name in Dialect::CHOICES {
            assert_eq!(name.parse::<Dialect>().map(|d| d.name()), Ok(name));
        }
    }
}
