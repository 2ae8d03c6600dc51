use crate::core::Storage;
use crate::utils::error::{MatchError, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Reads and writes files relative to one data directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    /// File names directly inside the data directory containing `pattern`, sorted.
    pub fn matching_files(&self, pattern: &str) -> Result<Vec<String>> {
        let base = Path::new(&self.base_path);
        if !base.is_dir() {
            return Err(MatchError::FileNotFound {
                pattern: pattern.to_string(),
                dir: self.base_path.clone(),
            });
        }

        let mut matches: Vec<String> = WalkDir::new(base)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name.contains(pattern))
            .collect();

        matches.sort();
        Ok(matches)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn find_file(&self, pattern: &str) -> Result<String> {
        let mut matches = self.matching_files(pattern)?.into_iter();
        let first = matches.next().ok_or_else(|| MatchError::FileNotFound {
            pattern: pattern.to_string(),
            dir: self.base_path.clone(),
        })?;

        let others: Vec<String> = matches.collect();
        if !others.is_empty() {
            tracing::warn!(
                "'{}' matches {} files, using {} (ignored: {})",
                pattern,
                others.len() + 1,
                first,
                others.join(", ")
            );
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with(files: &[&str]) -> (TempDir, LocalStorage) {
        let dir = TempDir::new().unwrap();
        for file in files {
            fs::write(dir.path().join(file), b"Name\n").unwrap();
        }
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        (dir, storage)
    }

    #[tokio::test]
    async fn test_find_file_by_substring() {
        let (_dir, storage) = storage_with(&[
            "Mentor matching survey (Responses) - Form 1.csv",
            "Student Sign Up Form (Responses).xlsx",
        ]);

        let found = storage.find_file("Mentor matching").await.unwrap();
        assert_eq!(found, "Mentor matching survey (Responses) - Form 1.csv");
    }

    #[tokio::test]
    async fn test_find_file_is_case_sensitive_and_sorted() {
        let (_dir, storage) = storage_with(&["b_mentor.csv", "a_mentor.csv", "MENTOR.csv"]);

        assert_eq!(storage.find_file("mentor").await.unwrap(), "a_mentor.csv");
        assert_eq!(storage.find_file("MENTOR").await.unwrap(), "MENTOR.csv");
    }

    #[tokio::test]
    async fn test_missing_file_fails_fast() {
        let (_dir, storage) = storage_with(&["unrelated.csv"]);
        let err = storage.find_file("Student").await.unwrap_err();
        assert!(matches!(err, MatchError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let (_dir, storage) = storage_with(&[]);
        storage.write_file("out.csv", b"Name\n").await.unwrap();
        assert_eq!(storage.read_file("out.csv").await.unwrap(), b"Name\n");
    }
}
