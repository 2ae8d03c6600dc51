use crate::domain::model::{Cohort, PersonEntry};

/// Merges repeated submissions into one entry per name by set union.
pub fn aggregate<I>(entries: I) -> Cohort
where
    I: IntoIterator<Item = PersonEntry>,
{
    let mut cohort = Cohort::new();
    for entry in entries {
        cohort.merge(entry);
    }
    cohort
}
