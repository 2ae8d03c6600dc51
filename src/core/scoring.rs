//! Overlap scoring and per-mentee ranking.

use crate::domain::model::{Cohort, InterestSet, RankedMentor, RankingRow};
use serde::{Deserialize, Serialize};

/// What to do with a mentee who declared no interests, since the overlap
/// fraction has an empty denominator for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EmptyInterestPolicy {
    /// Score every mentor 0.0; the ranking keeps mentor order.
    #[default]
    Zero,
    /// Leave the mentee out of the output table.
    Exclude,
}

/// Fraction of the mentee's interests the mentor shares, in `[0, 1]`.
/// `None` when the mentee has no interests.
pub fn overlap_score(mentee: &InterestSet, mentor: &InterestSet) -> Option<f64> {
    if mentee.is_empty() {
        return None;
    }
    let shared = mentee.intersection(mentor).count();
    Some(shared as f64 / mentee.len() as f64)
}

/// Scores all mentors against one mentee, best first. The sort is stable, so
/// ties keep mentor order.
pub fn rank_mentors(mentee: &InterestSet, mentors: &Cohort) -> Vec<RankedMentor> {
    let mut ranked: Vec<RankedMentor> = mentors
        .iter()
        .map(|mentor| RankedMentor {
            name: mentor.name.clone(),
            score: overlap_score(mentee, &mentor.interests).unwrap_or(0.0),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Rankings for every mentee plus the names excluded by `policy`.
pub fn rank_all(
    mentees: &Cohort,
    mentors: &Cohort,
    policy: EmptyInterestPolicy,
) -> (Vec<RankingRow>, Vec<String>) {
    let mut rows = Vec::with_capacity(mentees.len());
    let mut excluded = Vec::new();

    for mentee in mentees.iter() {
        if mentee.interests.is_empty() {
            match policy {
                EmptyInterestPolicy::Zero => {
                    tracing::warn!(
                        "Mentee '{}' listed no interests, scoring all mentors 0.00",
                        mentee.name
                    );
                }
                EmptyInterestPolicy::Exclude => {
                    tracing::warn!(
                        "Mentee '{}' listed no interests, leaving them out",
                        mentee.name
                    );
                    excluded.push(mentee.name.clone());
                    continue;
                }
            }
        }

        let ranked = rank_mentors(&mentee.interests, mentors);
        if let Some(best) = ranked.first() {
            tracing::debug!("{} → best match {}", mentee.name, best);
        }
        rows.push(RankingRow {
            mentee: mentee.name.clone(),
            ranked,
        });
    }

    (rows, excluded)
}
