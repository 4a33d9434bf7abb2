use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::normalize::normalize_list;

/// One benchmark task instance. Field names follow the upstream dataset
/// export; list-valued fields are normalized at construction and the
/// record never mutates afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskRecord {
    pub instance_id: String,
    pub repo: String,
    pub repo_language: String,
    pub base_commit: String,
    pub problem_statement: String,
    pub requirements: String,
    pub interface: String,
    pub patch: String,
    pub test_patch: String,
    pub issue_specificity: Vec<String>,
    pub issue_categories: Vec<String>,
    pub selected_test_files_to_run: Vec<String>,
    pub fail_to_pass: Vec<String>,
    pub pass_to_pass: Vec<String>,
}

/// Wire shape of a record before normalization. The list fields arrive
/// in whatever encoding the exporter chose, so they are held as raw
/// JSON values here.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    pub instance_id: String,
    pub repo: String,
    #[serde(default)]
    pub repo_language: String,
    #[serde(default)]
    pub base_commit: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub interface: String,
    #[serde(default)]
    pub patch: String,
    #[serde(default)]
    pub test_patch: String,
    #[serde(default)]
    pub issue_specificity: Option<Value>,
    #[serde(default)]
    pub issue_categories: Option<Value>,
    #[serde(default)]
    pub selected_test_files_to_run: Option<Value>,
    #[serde(default)]
    pub fail_to_pass: Option<Value>,
    #[serde(default)]
    pub pass_to_pass: Option<Value>,
}

impl From<RawRecord> for TaskRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            instance_id: raw.instance_id,
            repo: raw.repo,
            repo_language: raw.repo_language,
            base_commit: raw.base_commit,
            problem_statement: raw.problem_statement,
            requirements: raw.requirements,
            interface: raw.interface,
            patch: raw.patch,
            test_patch: raw.test_patch,
            issue_specificity: normalize_list(raw.issue_specificity.as_ref()),
            issue_categories: normalize_list(raw.issue_categories.as_ref()),
            selected_test_files_to_run: normalize_list(raw.selected_test_files_to_run.as_ref()),
            fail_to_pass: normalize_list(raw.fail_to_pass.as_ref()),
            pass_to_pass: normalize_list(raw.pass_to_pass.as_ref()),
        }
    }
}

#[expect(clippy::unwrap_used, reason = "pattern is a literal")]
static HEX_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-f0-9]{10})[a-f0-9]{30,}").unwrap());

/// Shortens instance ids like
/// `instance_NodeBB__NodeBB-04998908ba…<40 hex>` by truncating long hex
/// runs to their first 10 characters. Ids with at most two
/// hyphen-separated segments are returned unchanged.
pub fn short_id(instance_id: &str) -> String {
    if instance_id.split('-').count() > 2 {
        HEX_RUN.replace_all(instance_id, "$1…").into_owned()
    } else {
        instance_id.to_string()
    }
}

/// URL of the base commit on the hosting site.
pub fn commit_url(record: &TaskRecord) -> String {
    format!(
        "https://github.com/{}/commit/{}",
        record.repo, record.base_commit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_id_keeps_simple_ids() {
        assert_eq!(short_id("owner__repo-1234"), "owner__repo-1234");
        assert_eq!(short_id("plain"), "plain");
    }

    #[test]
    fn short_id_truncates_long_hex_runs() {
        let hex = "0499890812345678901234567890123456789012";
        let id = format!("instance_NodeBB__NodeBB-{hex}-extra");
        assert_eq!(short_id(&id), "instance_NodeBB__NodeBB-0499890812…-extra");
    }

    #[test]
    fn short_id_is_idempotent() {
        let hex = "0499890812345678901234567890123456789012";
        let id = format!("a-b-c-{hex}");
        let once = short_id(&id);
        assert_eq!(short_id(&once), once);
    }

    #[test]
    fn short_id_leaves_short_hex_alone() {
        // 10 + fewer than 30 trailing hex chars does not match the run rule.
        let id = "a-b-c-0499890812345678";
        assert_eq!(short_id(id), id);
    }

    #[test]
    fn commit_url_is_github_commit_page() {
        let record = TaskRecord {
            repo: "owner/name".into(),
            base_commit: "abc123".into(),
            ..Default::default()
        };
        assert_eq!(
            commit_url(&record),
            "https://github.com/owner/name/commit/abc123"
        );
    }
}
