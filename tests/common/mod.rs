#![allow(dead_code)]

use mentor_match::core::columns::ColumnSelector;
use mentor_match::core::scoring::EmptyInterestPolicy;
use mentor_match::core::{ConfigProvider, Storage};
use mentor_match::{MatchError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const MENTEE_CSV: &str = "\
Timestamp,Email,Name,Year,Major,Minor,Club,Interests,Hobbies,Career goals
2024-09-01,a@x.org,Alice ,2,CS,,,coding,music,
2024-09-01,q@x.org,Quinn,1,Art,,,,,
2024-09-02,d@x.org,Dee,3,Bio,,,\"cats, dogs\",,
2024-09-03,d@x.org,Dee,3,Bio,,,,dogs; birds,
";

pub const MENTOR_CSV: &str = "\
Timestamp,Full Name,Company,Expertise,Hobbies,Other
2024-08-20,Bob,Acme,coding,art,
2024-08-21,Cara,Initech,\"coding, music\",art,
2024-08-22,Dan,Hooli,birds,cats,dogs
";

/// In-memory stand-in for the data directory.
#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MockStorage {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let map = files
            .iter()
            .map(|(name, data)| (name.to_string(), data.as_bytes().to_vec()))
            .collect();
        Self {
            files: Arc::new(Mutex::new(map)),
        }
    }

    pub async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().await.get(path).cloned()
    }

    pub async fn file_count(&self) -> usize {
        self.files.lock().await.len()
    }
}

impl Storage for MockStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            MatchError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn find_file(&self, pattern: &str) -> Result<String> {
        let files = self.files.lock().await;
        files
            .keys()
            .find(|name| name.contains(pattern))
            .cloned()
            .ok_or_else(|| MatchError::FileNotFound {
                pattern: pattern.to_string(),
                dir: "memory".to_string(),
            })
    }
}

/// Config used by the integration tests: interest columns are picked after the
/// timestamp index column is dropped.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mentee_columns: Vec<ColumnSelector>,
    pub mentor_columns: Vec<ColumnSelector>,
    pub name_column: Option<ColumnSelector>,
    pub policy: EmptyInterestPolicy,
    pub lowercase: bool,
    pub output_name: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mentee_columns: vec![
                ColumnSelector::Index(6),
                ColumnSelector::Index(7),
                ColumnSelector::Index(8),
            ],
            mentor_columns: vec![
                ColumnSelector::Index(2),
                ColumnSelector::Index(3),
                ColumnSelector::Index(4),
            ],
            name_column: None,
            policy: EmptyInterestPolicy::Zero,
            lowercase: false,
            output_name: "Mentor_Similarities".to_string(),
        }
    }
}

impl ConfigProvider for TestConfig {
    fn data_dir(&self) -> &str {
        "memory"
    }

    fn mentee_file(&self) -> &str {
        "Student Sign Up"
    }

    fn mentor_file(&self) -> &str {
        "Mentor matching"
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
        true
    }

    fn empty_interest_policy(&self) -> EmptyInterestPolicy {
        self.policy
    }

    fn lowercase_interests(&self) -> bool {
        self.lowercase
    }

    fn output_name(&self) -> &str {
        &self.output_name
    }
}

pub fn survey_storage() -> MockStorage {
    MockStorage::with_files(&[
        ("Student Sign Up Form (Responses).csv", MENTEE_CSV),
        ("Mentor matching survey (Responses).csv", MENTOR_CSV),
    ])
}
