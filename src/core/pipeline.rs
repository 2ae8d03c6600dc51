use crate::adapters::table_io::{decode_table, encode_rankings};
use crate::core::aggregate::aggregate;
use crate::core::extraction::{extract_entries, InterestColumns};
use crate::core::interests::InterestParser;
use crate::core::scoring::rank_all;
use crate::core::{ConfigProvider, MatchReport, Pipeline, Storage, SurveyData, Table};
use crate::domain::model::Cohort;
use crate::utils::error::{MatchError, Result};
use std::path::Path;

pub const MENTEE: &str = "mentee";
pub const MENTOR: &str = "mentor";

/// Loads both surveys, ranks every mentor for every mentee and writes one CSV.
pub struct MatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn load_survey(&self, pattern: &str, cohort: &str) -> Result<Table> {
        let path = self.storage.find_file(pattern).await?;
        tracing::info!("📄 Reading {} responses from {}", cohort, path);

        let bytes = self.storage.read_file(&path).await?;
        let table = decode_table(&path, &bytes)?;
        tracing::debug!(
            "{} table: {} columns, {} rows",
            cohort,
            table.column_count(),
            table.row_count()
        );

        if self.config.has_index_column() {
            Ok(table.without_index_column())
        } else {
            Ok(table)
        }
    }

    fn build_cohort(&self, table: &Table, cohort: &str) -> Result<Cohort> {
        let interests = if cohort == MENTEE {
            self.config.mentee_columns()
        } else {
            self.config.mentor_columns()
        };
        let columns = InterestColumns {
            interests,
            name: self.config.name_column(),
        };
        let parser = InterestParser::new(self.config.lowercase_interests());

        let entries = extract_entries(table, &columns, parser, cohort)?;
        let submissions = entries.len();
        let people = aggregate(entries);
        tracing::info!(
            "👥 {} {} submissions from {} people",
            submissions,
            cohort,
            people.len()
        );

        if people.is_empty() {
            return Err(MatchError::EmptyCohort {
                cohort: cohort.to_string(),
            });
        }
        Ok(people)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MatchPipeline<S, C> {
    async fn extract(&self) -> Result<SurveyData> {
        let mentees = self.load_survey(self.config.mentee_file(), MENTEE).await?;
        let mentors = self.load_survey(self.config.mentor_file(), MENTOR).await?;
        Ok(SurveyData { mentees, mentors })
    }

    async fn transform(&self, data: SurveyData) -> Result<MatchReport> {
        let mentees = self.build_cohort(&data.mentees, MENTEE)?;
        let mentors = self.build_cohort(&data.mentors, MENTOR)?;

        let (rankings, excluded) =
            rank_all(&mentees, &mentors, self.config.empty_interest_policy());

        Ok(MatchReport {
            mentees,
            mentors,
            rankings,
            excluded,
        })
    }

    async fn load(&self, report: &MatchReport) -> Result<String> {
        let file_name = self.config.output_file();
        let data = encode_rankings(report)?;

        tracing::debug!("Writing {} bytes to {}", data.len(), file_name);
        self.storage.write_file(&file_name, &data).await?;

        Ok(Path::new(self.config.data_dir())
            .join(&file_name)
            .display()
            .to_string())
    }
}
