//! Header row normalization.

use std::collections::BTreeSet;

const UTF8_BOM: char = '\u{feff}';

/// Turn raw header cells into unique column names.
///
/// - a leading byte-order mark on the first cell is removed
/// - blank names become `Unnamed: <index>`
/// - repeats get `.1`, `.2`, ... appended so every cell keeps a key
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used = BTreeSet::new();
    let mut columns = Vec::new();
    for (idx, cell) in raw.into_iter().enumerate() {
        let cell = if idx == 0 {
            cell.trim_start_matches(UTF8_BOM)
        } else {
            cell
        };
        let base = if cell.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            cell.to_string()
        };
        let mut name = base.clone();
        let mut suffix = 1usize;
        while used.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        used.insert(name.clone());
        columns.push(name);
    }
    columns
}

/// True when no header cell carries a name.
pub fn is_blank_header<'a, I>(raw: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .all(|cell| cell.trim_start_matches(UTF8_BOM).trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bom_from_first_cell() {
        let columns = normalize_headers(["\u{feff}A", "B"]);
        assert_eq!(columns, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicates_get_suffix() {
        let columns = normalize_headers(["a", "a", "b", "a"]);
        assert_eq!(columns, vec!["a", "a.1", "b", "a.2"]);
    }

    #[test]
    fn test_suffix_skips_existing_names() {
        let columns = normalize_headers(["a", "a.1", "a"]);
        assert_eq!(columns, vec!["a", "a.1", "a.2"]);
    }

    #[test]
    fn test_blank_names_are_positional() {
        let columns = normalize_headers(["a", "", " "]);
        assert_eq!(columns, vec!["a", "Unnamed: 1", "Unnamed: 2"]);
    }

    #[test]
    fn test_blank_header_detection() {
        assert!(is_blank_header(["", "  "]));
        assert!(is_blank_header(["\u{feff}"]));
        assert!(!is_blank_header(["", "x"]));
    }

    #[test]
    fn test_internal_spacing_preserved() {
        let columns = normalize_headers(["Please enter the  11-digit order number:"]);
        assert_eq!(columns, vec!["Please enter the  11-digit order number:"]);
    }
}
