use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Normalized interest tokens for one person. Ordered so output is reproducible.
pub type InterestSet = BTreeSet<String>;

/// A loaded survey sheet: one header row plus data rows. Missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Drops the leading column from headers and rows. Survey exports carry a
    /// timestamp there that acts as the row index rather than data.
    pub fn without_index_column(mut self) -> Self {
        if !self.headers.is_empty() {
            self.headers.remove(0);
        }
        for row in &mut self.rows {
            if !row.is_empty() {
                row.remove(0);
            }
        }
        self
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell text for `row`/`column`; short rows read as missing.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }
}

/// The two raw survey tables produced by the extract stage.
#[derive(Debug, Clone, Default)]
pub struct SurveyData {
    pub mentees: Table,
    pub mentors: Table,
}

/// One survey submission after interest extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonEntry {
    pub name: String,
    pub interests: InterestSet,
}

impl PersonEntry {
    pub fn new(name: impl Into<String>, interests: InterestSet) -> Self {
        Self {
            name: name.into(),
            interests,
        }
    }
}

/// People keyed by name, each with a single merged interest set.
/// Iteration follows the order in which names first appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cohort {
    people: Vec<PersonEntry>,
    index: HashMap<String, usize>,
}

impl Cohort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a submission, unioning its interests into any earlier entry with the same name.
    pub fn merge(&mut self, entry: PersonEntry) {
        match self.index.get(&entry.name) {
            Some(&position) => self.people[position].interests.extend(entry.interests),
            None => {
                self.index.insert(entry.name.clone(), self.people.len());
                self.people.push(entry);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&InterestSet> {
        self.index.get(name).map(|&i| &self.people[i].interests)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonEntry> {
        self.people.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.people.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// One rank slot: a mentor and the fraction of the mentee's interests they share.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMentor {
    pub name: String,
    pub score: f64,
}

impl fmt::Display for RankedMentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:.2}", self.name, self.score)
    }
}

/// All mentors for one mentee, best match first.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub mentee: String,
    pub ranked: Vec<RankedMentor>,
}

impl RankingRow {
    pub fn formatted(&self) -> Vec<String> {
        self.ranked.iter().map(ToString::to_string).collect()
    }
}

/// Output of the transform stage.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    pub mentees: Cohort,
    pub mentors: Cohort,
    pub rankings: Vec<RankingRow>,
    /// Mentees left out of `rankings` because they declared no interests.
    pub excluded: Vec<String>,
}

impl MatchReport {
    pub fn rank_columns(&self) -> usize {
        self.mentors.len()
    }

    pub fn ranking_for(&self, mentee: &str) -> Option<&RankingRow> {
        self.rankings.iter().find(|row| row.mentee == mentee)
    }
}
