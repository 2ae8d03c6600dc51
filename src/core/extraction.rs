use crate::core::columns::{resolve_columns, resolve_name_column, ColumnSelector};
use crate::core::interests::{join_answers, InterestParser};
use crate::domain::model::{PersonEntry, Table};
use crate::utils::error::Result;

/// Which columns of a survey hold names and interests.
#[derive(Debug, Clone)]
pub struct InterestColumns<'a> {
    pub interests: &'a [ColumnSelector],
    pub name: Option<&'a ColumnSelector>,
}

/// Turns every response row into a `(name, interests)` entry.
///
/// Missing cells in the selected columns count as empty answers. Rows whose
/// name cell is blank cannot be attributed to anyone and are skipped.
pub fn extract_entries(
    table: &Table,
    columns: &InterestColumns<'_>,
    parser: InterestParser,
    cohort: &str,
) -> Result<Vec<PersonEntry>> {
    let interest_columns = resolve_columns(table, columns.interests, cohort)?;
    let name_column = resolve_name_column(table, columns.name, cohort)?;

    tracing::debug!(
        "{} columns: name={} ({}), interests={:?}",
        cohort,
        name_column,
        table.headers[name_column],
        interest_columns
            .iter()
            .map(|&c| table.headers[c].as_str())
            .collect::<Vec<_>>()
    );

    let mut entries = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let name = table.cell(row, name_column).unwrap_or_default().trim();
        if name.is_empty() {
            tracing::warn!("Skipping {} row {} with no name", cohort, row + 1);
            continue;
        }

        let blob = join_answers(
            interest_columns
                .iter()
                .map(|&column| table.cell(row, column).unwrap_or_default()),
        );
        entries.push(PersonEntry::new(name, parser.parse(&blob)));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MatchError;

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn table() -> Table {
        Table::new(
            vec!["Name".into(), "Likes".into(), "Also likes".into()],
            vec![
                vec![cell(" Alice "), cell("coding"), cell("music; coding")],
                vec![cell("Bob"), None, cell("")],
                vec![None, cell("art"), None],
                vec![cell("Cara"), cell("art")],
            ],
        )
    }

    #[test]
    fn test_extracts_trimmed_names_and_interest_sets() {
        let selectors = [ColumnSelector::Index(1), ColumnSelector::Index(2)];
        let columns = InterestColumns {
            interests: &selectors,
            name: None,
        };
        let entries =
            extract_entries(&table(), &columns, InterestParser::default(), "mentee").unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
        assert_eq!(entries[0].interests.len(), 2);
        assert!(entries[1].interests.is_empty());
        assert!(entries[2].interests.contains("art"));
    }

    #[test]
    fn test_bad_selector_fails_before_reading_rows() {
        let selectors = [ColumnSelector::Index(5)];
        let columns = InterestColumns {
            interests: &selectors,
            name: None,
        };
        let err =
            extract_entries(&table(), &columns, InterestParser::default(), "mentor").unwrap_err();
        assert!(matches!(err, MatchError::ColumnOutOfRange { index: 5, .. }));
    }
}
