use super::{
    DEFAULT_DATA_DIR, DEFAULT_MENTEE_COLUMNS, DEFAULT_MENTEE_FILE, DEFAULT_MENTOR_COLUMNS,
    DEFAULT_MENTOR_FILE, DEFAULT_OUTPUT_NAME,
};
use crate::core::columns::ColumnSelector;
use crate::core::scoring::EmptyInterestPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{
    validate_column_selection, validate_file_stem, validate_non_empty_string, validate_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration. Every section is optional and falls back to the
/// same defaults as the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub columns: ColumnsConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub data_dir: String,
    pub mentee_file: String,
    pub mentor_file: String,
    /// Whether the first column is a row index rather than data.
    pub index_column: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            mentee_file: DEFAULT_MENTEE_FILE.to_string(),
            mentor_file: DEFAULT_MENTOR_FILE.to_string(),
            index_column: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    pub mentee: Vec<ColumnSelector>,
    pub mentor: Vec<ColumnSelector>,
    pub name: Option<ColumnSelector>,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            mentee: DEFAULT_MENTEE_COLUMNS.map(ColumnSelector::Index).to_vec(),
            mentor: DEFAULT_MENTOR_COLUMNS.map(ColumnSelector::Index).to_vec(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub empty_interests: EmptyInterestPolicy,
    pub lowercase: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unknown ones are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatchError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.input.data_dir
    }

    fn mentee_file(&self) -> &str {
        &self.input.mentee_file
    }

    fn mentor_file(&self) -> &str {
        &self.input.mentor_file
    }

    fn mentee_columns(&self) -> &[ColumnSelector] {
        &self.columns.mentee
    }

    fn mentor_columns(&self) -> &[ColumnSelector] {
        &self.columns.mentor
    }

    fn name_column(&self) -> Option<&ColumnSelector> {
        self.columns.name.as_ref()
    }

    fn has_index_column(&self) -> bool {
        self.input.index_column
    }

    fn empty_interest_policy(&self) -> EmptyInterestPolicy {
        self.matching.empty_interests
    }

    fn lowercase_interests(&self) -> bool {
        self.matching.lowercase
    }

    fn output_name(&self) -> &str {
        &self.output.name
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.data_dir", &self.input.data_dir)?;
        validate_non_empty_string("input.mentee_file", &self.input.mentee_file)?;
        validate_non_empty_string("input.mentor_file", &self.input.mentor_file)?;
        validate_column_selection("columns.mentee", &self.columns.mentee)?;
        validate_column_selection("columns.mentor", &self.columns.mentor)?;
        validate_file_stem("output.name", &self.output.name)
    }
}
