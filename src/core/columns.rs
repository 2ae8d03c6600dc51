use crate::domain::model::Table;
use crate::utils::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a survey column is picked: by zero-based position or by exact header text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSelector {
    Index(usize),
    Header(String),
}

impl ColumnSelector {
    /// Resolves the selector against `table`, naming `cohort` in any error.
    pub fn resolve(&self, table: &Table, cohort: &str) -> Result<usize> {
        match self {
            ColumnSelector::Index(index) if *index < table.column_count() => Ok(*index),
            ColumnSelector::Index(index) => Err(MatchError::ColumnOutOfRange {
                cohort: cohort.to_string(),
                index: *index,
                available: table.column_count(),
            }),
            ColumnSelector::Header(header) => table
                .headers
                .iter()
                .position(|h| h.trim() == header.trim())
                .ok_or_else(|| MatchError::ColumnNotFound {
                    cohort: cohort.to_string(),
                    column: header.clone(),
                }),
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Index(index) => write!(f, "{}", index),
            ColumnSelector::Header(header) => f.write_str(header),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column selector cannot be empty")]
pub struct EmptySelectorError;

impl FromStr for ColumnSelector {
    type Err = EmptySelectorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptySelectorError);
        }
        Ok(match trimmed.parse::<usize>() {
            Ok(index) => ColumnSelector::Index(index),
            Err(_) => ColumnSelector::Header(trimmed.to_string()),
        })
    }
}

/// Resolves every selector, failing on the first that does not fit the table.
pub fn resolve_columns(
    table: &Table,
    selectors: &[ColumnSelector],
    cohort: &str,
) -> Result<Vec<usize>> {
    selectors
        .iter()
        .map(|selector| selector.resolve(table, cohort))
        .collect()
}

/// Finds the name column: the explicit selector if given, otherwise the first
/// header containing `Name`.
pub fn resolve_name_column(
    table: &Table,
    selector: Option<&ColumnSelector>,
    cohort: &str,
) -> Result<usize> {
    if let Some(selector) = selector {
        return selector.resolve(table, cohort);
    }

    table
        .headers
        .iter()
        .position(|header| header.contains("Name"))
        .ok_or_else(|| MatchError::NameColumnMissing {
            cohort: cohort.to_string(),
        })
}
