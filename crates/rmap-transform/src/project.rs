//! Field resolution and projection into the output schema.

use rmap_model::{FieldRule, InputTable, MappingSpec, OutputTable, Record};

/// Resolve one output value for `record`. Never fails.
///
/// - `Drop`: always empty
/// - `Derived`: the derived value stored on the record, as-is
/// - `Candidates`: trimmed value of the first present, non-blank column
/// - `Direct`: trimmed value, or empty if the column is absent
pub fn resolve(record: &Record, rule: &FieldRule) -> String {
    match rule {
        FieldRule::Drop => String::new(),
        FieldRule::Derived(field) => record.value(field.key()).to_string(),
        FieldRule::Candidates(columns) => columns
            .iter()
            .filter_map(|column| record.get(column))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_string(),
        FieldRule::Direct(column) => record.value(column).trim().to_string(),
    }
}

/// Build the output table: one row per input record, columns in mapping order.
pub fn project(table: &InputTable, spec: &MappingSpec) -> OutputTable {
    let mut output = OutputTable::new(spec.output_columns());
    output.rows.reserve(table.rows.len());
    for record in &table.rows {
        let row = spec
            .entries()
            .iter()
            .map(|entry| resolve(record, &entry.rule))
            .collect();
        output.push_row(row);
    }
    output
}

/// Source columns the mapping reads that the table header does not have.
pub fn missing_source_columns(table: &InputTable, spec: &MappingSpec) -> Vec<String> {
    spec.source_columns()
        .into_iter()
        .filter(|column| !table.has_column(column))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmap_model::DerivedField;

    #[test]
    fn test_resolve_drop_ignores_record() {
        let record = Record::from_pairs([("City", "Leeds")]);
        assert_eq!(resolve(&record, &FieldRule::Drop), "");
    }

    #[test]
    fn test_resolve_direct_trims() {
        let record = Record::from_pairs([("a", "  x  ")]);
        assert_eq!(resolve(&record, &FieldRule::direct("a")), "x");
        assert_eq!(resolve(&record, &FieldRule::direct("missing")), "");
    }

    #[test]
    fn test_resolve_candidates_first_non_blank() {
        let record = Record::from_pairs([("a", "   "), ("b", "Lager 4-pack"), ("c", "Cider")]);
        let rule = FieldRule::candidates(["missing", "a", "b", "c"]);
        assert_eq!(resolve(&record, &rule), "Lager 4-pack");
    }

    #[test]
    fn test_resolve_candidates_none_match() {
        let record = Record::from_pairs([("a", "")]);
        assert_eq!(resolve(&record, &FieldRule::candidates(["a", "b"])), "");
    }

    #[test]
    fn test_resolve_derived_month() {
        let record = Record::from_pairs([("__MONTH__", "March")]);
        let rule = FieldRule::Derived(DerivedField::Month);
        assert_eq!(resolve(&record, &rule), "March");
        assert_eq!(resolve(&Record::new(), &rule), "");
    }
}
