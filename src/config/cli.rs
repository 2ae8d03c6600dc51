use crate::core::columns::ColumnSelector;
use crate::core::scoring::EmptyInterestPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_column_selection, validate_file_stem, validate_non_empty_string, validate_path,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mentor-match")]
#[command(about = "Rank mentors for each mentee by shared survey interests")]
pub struct CliConfig {
    /// Directory holding the survey exports; the ranking table is written here too
    #[arg(long, default_value = super::DEFAULT_DATA_DIR)]
    pub data_dir: String,

    /// Substring of the mentee survey file name (case-sensitive)
    #[arg(long, default_value = super::DEFAULT_MENTEE_FILE)]
    pub mentee_file: String,

    /// Substring of the mentor survey file name (case-sensitive)
    #[arg(long, default_value = super::DEFAULT_MENTOR_FILE)]
    pub mentor_file: String,

    /// Mentee interest columns: zero-based indices or header names
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values = ["6", "7", "8"])]
    pub mentee_columns: Vec<ColumnSelector>,

    /// Mentor interest columns: zero-based indices or header names
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values = ["3", "4", "5"])]
    pub mentor_columns: Vec<ColumnSelector>,

    /// Name column; defaults to the first header containing "Name"
    #[arg(long)]
    pub name_column: Option<ColumnSelector>,

    /// Count the leading timestamp column as a data column
    #[arg(long)]
    pub no_index_column: bool,

    /// How to score mentees who listed no interests
    #[arg(long, value_enum, default_value = "zero")]
    pub empty_interests: EmptyInterestPolicy,

    /// Compare interests case-insensitively
    #[arg(long)]
    pub lowercase: bool,

    /// Output file stem; written as <name>.csv in lower case
    #[arg(long, default_value = super::DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// Open an inspection shell after the table is written
    #[arg(long)]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log stage timings and memory use")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn mentee_file(&self) -> &str {
        &self.mentee_file
    }

    fn mentor_file(&self) -> &str {
        &self.mentor_file
    }

    fn mentee_columns(&self) -> &[ColumnSelector] {
        &self.mentee_columns
    }

    fn mentor_columns(&self) -> &[ColumnSelector] {
        &self.mentor_columns
    }

    fn name_column(&self) -> Option<&ColumnSelector> {
        self.name_column.as_ref()
    }

    fn has_index_column(&self) -> bool {
        !self.no_index_column
    }

    fn empty_interest_policy(&self) -> EmptyInterestPolicy {
        self.empty_interests
    }

    fn lowercase_interests(&self) -> bool {
        self.lowercase
    }

    fn output_name(&self) -> &str {
        &self.output_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("mentee_file", &self.mentee_file)?;
        validate_non_empty_string("mentor_file", &self.mentor_file)?;
        validate_column_selection("mentee_columns", &self.mentee_columns)?;
        validate_column_selection("mentor_columns", &self.mentor_columns)?;
        validate_file_stem("output_name", &self.output_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_survey_layout() {
        let config = CliConfig::parse_from(["mentor-match"]);

        assert_eq!(config.data_dir, "./data");
        assert_eq!(
            config.mentee_columns,
            vec![
                ColumnSelector::Index(6),
                ColumnSelector::Index(7),
                ColumnSelector::Index(8)
            ]
        );
        assert_eq!(config.mentor_columns.len(), 3);
        assert!(config.has_index_column());
        assert_eq!(config.empty_interest_policy(), EmptyInterestPolicy::Zero);
        assert_eq!(config.output_file(), "mentor_similarities.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_column_lists_accept_indices_and_headers() {
        let config = CliConfig::parse_from([
            "mentor-match",
            "--mentor-columns",
            "2,Hobbies",
            "--name-column",
            "Preferred Name",
            "--empty-interests",
            "exclude",
            "--output-name",
            "Spring_Matches",
        ]);

        assert_eq!(
            config.mentor_columns,
            vec![
                ColumnSelector::Index(2),
                ColumnSelector::Header("Hobbies".to_string())
            ]
        );
        assert_eq!(
            config.name_column(),
            Some(&ColumnSelector::Header("Preferred Name".to_string()))
        );
        assert_eq!(config.empty_interest_policy(), EmptyInterestPolicy::Exclude);
        assert_eq!(config.output_file(), "spring_matches.csv");
    }

    #[test]
    fn test_duplicate_columns_fail_validation() {
        let config = CliConfig::parse_from(["mentor-match", "--mentee-columns", "1,1"]);
        assert!(config.validate().is_err());
    }
}
