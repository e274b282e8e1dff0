use crate::error::{ConfigError, TableError};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::debug;

/// Rewrites the key field of every row before it is stored.
pub type KeyNormalizer = fn(&str) -> String;

/// Immutable mapping from tag name to its displayable count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    entries: BTreeMap<String, String>,
}

impl TagTable {
    /// Builds a table from raw rows with 1-based key/value field numbers.
    pub fn build<I, S>(
        rows: I,
        row_delimiter: &str,
        key_field: usize,
        value_field: usize,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TagTableBuilder::new(row_delimiter)
            .key_field(key_field)
            .value_field(value_field)
            .build(rows)
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All known tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Checks 1-based field numbers the way `cut`-like tools expect them.
pub fn validate_fields(key_field: usize, value_field: usize) -> Result<(), ConfigError> {
    if key_field < 1 || value_field < 1 {
        return Err(ConfigError::FieldIndexOutOfRange {
            key: key_field,
            value: value_field,
        });
    }
    if key_field == value_field {
        return Err(ConfigError::SameFieldIndex(key_field));
    }
    Ok(())
}

/// Trims a tag and replaces underscores with spaces (`long_hair` → `long hair`).
pub fn underscores_to_spaces(tag: &str) -> String {
    tag.trim().replace('_', " ")
}

/// Reads a tag table from delimited rows
#[derive(Debug, Clone)]
pub struct TagTableBuilder {
    delimiter: String,
    key_field: usize,
    value_field: usize,
    normalize_key: Option<KeyNormalizer>,
}

impl TagTableBuilder {
    /// Key in field 1, value in field 2, no key normalization.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            key_field: 1,
            value_field: 2,
            normalize_key: None,
        }
    }

    pub fn key_field(mut self, field: usize) -> Self {
        self.key_field = field;
        self
    }

    pub fn value_field(mut self, field: usize) -> Self {
        self.value_field = field;
        self
    }

    pub fn normalize_keys(mut self, normalizer: KeyNormalizer) -> Self {
        self.normalize_key = Some(normalizer);
        self
    }

    /// Fails on the first row that lacks the key or value field. Later
    /// duplicate keys overwrite earlier ones.
    pub fn build<I, S>(&self, rows: I) -> Result<TagTable, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_fields(self.key_field, self.value_field)?;
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyRowDelimiter.into());
        }

        let needed = self.key_field.max(self.value_field);
        let mut entries = BTreeMap::new();

        for (i, row) in rows.into_iter().enumerate() {
            let fields: Vec<&str> = row.as_ref().trim().split(self.delimiter.as_str()).collect();
            if fields.len() < needed {
                return Err(TableError::MalformedRow {
                    line: i + 1,
                    needed,
                    found: fields.len(),
                });
            }

            let key = fields[self.key_field - 1];
            let key = match self.normalize_key {
                Some(normalize) => normalize(key),
                None => key.to_string(),
            };
            entries.insert(key, fields[self.value_field - 1].to_string());
        }

        debug!(tags = entries.len(), "tag table built");
        Ok(TagTable { entries })
    }

    pub fn build_from_reader<R: BufRead>(&self, reader: R) -> Result<TagTable, TableError> {
        let rows = reader.lines().collect::<Result<Vec<_>, _>>()?;
        self.build(rows)
    }
}
