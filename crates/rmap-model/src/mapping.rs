//! Declarative column mapping: output column name → how to fill it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Fields computed from other fields before projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedField {
    /// Full month name of the parsed visit date.
    Month,
}

impl DerivedField {
    /// Record key the derived value is stored under.
    pub const fn key(self) -> &'static str {
        match self {
            DerivedField::Month => "__MONTH__",
        }
    }
}

impl fmt::Display for DerivedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How one output column is filled from a source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum FieldRule {
    /// Always empty.
    Drop,
    /// Trimmed value of one source column.
    Direct(String),
    /// First source column whose trimmed value is non-empty.
    Candidates(Vec<String>),
    /// Value of a derived field.
    Derived(DerivedField),
}

impl FieldRule {
    pub fn direct(column: impl Into<String>) -> Self {
        FieldRule::Direct(column.into())
    }

    pub fn candidates<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldRule::Candidates(columns.into_iter().map(Into::into).collect())
    }

    /// Source columns this rule reads, in priority order.
    pub fn source_columns(&self) -> Vec<&str> {
        match self {
            FieldRule::Drop | FieldRule::Derived(_) => Vec::new(),
            FieldRule::Direct(column) => vec![column.as_str()],
            FieldRule::Candidates(columns) => columns.iter().map(String::as_str).collect(),
        }
    }

    /// Short human description used by the column listing.
    pub fn describe(&self) -> String {
        match self {
            FieldRule::Drop => "(dropped)".to_string(),
            FieldRule::Direct(column) => column.clone(),
            FieldRule::Candidates(columns) => columns.join(" | "),
            FieldRule::Derived(field) => format!("derived {field}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub output: String,
    pub rule: FieldRule,
}

/// Ordered output schema. Entry order is output column order.
///
/// Deserialization goes through [`MappingSpec::new`], so a decoded mapping
/// is never empty and never repeats an output name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMappingSpec")]
pub struct MappingSpec {
    entries: Vec<MappingEntry>,
}

#[derive(Deserialize)]
struct RawMappingSpec {
    entries: Vec<MappingEntry>,
}

impl TryFrom<RawMappingSpec> for MappingSpec {
    type Error = ModelError;

    fn try_from(raw: RawMappingSpec) -> Result<Self> {
        Self::new(raw.entries)
    }
}

impl MappingSpec {
    /// Build a mapping, rejecting an empty one or repeated output names.
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ModelError::EmptyMapping);
        }
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.output.as_str()) {
                return Err(ModelError::DuplicateOutputColumn(entry.output.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Entries from a compiled-in table whose names are known to be unique.
    pub(crate) fn from_static_entries(entries: Vec<MappingEntry>) -> Self {
        debug_assert!(Self::new(entries.clone()).is_ok());
        Self { entries }
    }

    /// Convenience constructor from `(output, rule)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, FieldRule)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(output, rule)| MappingEntry {
                    output: output.into(),
                    rule,
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn output_columns(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.output.clone()).collect()
    }

    pub fn rule_for(&self, output: &str) -> Option<&FieldRule> {
        self.entries
            .iter()
            .find(|entry| entry.output == output)
            .map(|entry| &entry.rule)
    }

    /// Distinct source columns referenced anywhere in the mapping, first use first.
    pub fn source_columns(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for entry in &self.entries {
            for column in entry.rule.source_columns() {
                if seen.insert(column) {
                    ordered.push(column);
                }
            }
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_output_rejected() {
        let result = MappingSpec::from_pairs([
            ("A", FieldRule::Drop),
            ("A", FieldRule::direct("x")),
        ]);
        assert_eq!(
            result,
            Err(ModelError::DuplicateOutputColumn("A".to_string()))
        );
    }

    #[test]
    fn test_empty_spec_rejected() {
        assert_eq!(MappingSpec::new(Vec::new()), Err(ModelError::EmptyMapping));
    }

    #[test]
    fn test_source_columns_deduplicated_in_order() {
        let spec = MappingSpec::from_pairs([
            ("A", FieldRule::direct("b")),
            ("B", FieldRule::candidates(["a", "b"])),
            ("C", FieldRule::Derived(DerivedField::Month)),
        ])
        .unwrap();
        assert_eq!(spec.source_columns(), vec!["b", "a"]);
    }
}
