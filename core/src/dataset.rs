use std::collections::BTreeSet;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::record::RawRecord;
use crate::record::TaskRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no records")]
    Empty,
}

/// The loaded dataset plus metadata derived once at load time. Records
/// and metadata are immutable for the process lifetime.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<TaskRecord>,
    repos: Vec<String>,
    languages: Vec<String>,
}

impl Dataset {
    /// Reads a JSON array of task records from `path`, normalizing the
    /// list-valued fields and deriving the sorted distinct repo and
    /// language sets.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path)?;
        let raw: Vec<RawRecord> = serde_json::from_str(&contents)?;
        Self::from_records(raw.into_iter().map(TaskRecord::from).collect())
    }

    pub fn from_records(records: Vec<TaskRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if !seen.insert(record.instance_id.as_str()) {
                warn!(instance_id = %record.instance_id, "duplicate instance id in dataset");
            }
        }

        let repos: BTreeSet<String> = records.iter().map(|r| r.repo.clone()).collect();
        let languages: BTreeSet<String> =
            records.iter().map(|r| r.repo_language.clone()).collect();

        Ok(Self {
            records,
            repos: repos.into_iter().collect(),
            languages: languages.into_iter().collect(),
        })
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    /// Distinct repository names, lexicographically sorted.
    pub fn repos(&self) -> &[String] {
        &self.repos
    }

    /// Distinct language tags, lexicographically sorted.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, repo: &str, language: &str) -> TaskRecord {
        TaskRecord {
            instance_id: id.to_string(),
            repo: repo.to_string(),
            repo_language: language.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn derives_sorted_distinct_repos_and_languages() {
        let dataset = Dataset::from_records(vec![
            record("1", "b/y", "python"),
            record("2", "a/x", "go"),
            record("3", "b/y", "go"),
        ])
        .expect("dataset");
        assert_eq!(dataset.repos(), ["a/x", "b/y"]);
        assert_eq!(dataset.languages(), ["go", "python"]);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(matches!(
            Dataset::from_records(Vec::new()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let dataset =
            Dataset::from_records(vec![record("1", "a/x", "go"), record("1", "a/x", "go")])
                .expect("dataset");
        assert_eq!(dataset.records().len(), 2);
    }
}
