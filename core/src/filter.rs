use crate::record::TaskRecord;

/// Current filter inputs. `None` for repo/language means "no filter";
/// the query is free text, split on whitespace into AND-ed terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub query: String,
    pub repo: Option<String>,
    pub language: Option<String>,
}

/// Returns the indices of records matching all three predicates, in
/// dataset order. Pure: selection reset on filter change is the
/// caller's concern.
pub fn apply_filters(records: &[TaskRecord], params: &FilterParams) -> Vec<usize> {
    let query = params.query.trim().to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            if let Some(repo) = &params.repo
                && record.repo != *repo
            {
                return false;
            }
            if let Some(language) = &params.language
                && record.repo_language != *language
            {
                return false;
            }
            if terms.is_empty() {
                return true;
            }
            let haystack = searchable_text(record);
            terms.iter().all(|term| haystack.contains(term))
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// The concatenation the free-text query is matched against, lowercased.
fn searchable_text(record: &TaskRecord) -> String {
    format!(
        "{} {} {} {} {}",
        record.instance_id,
        record.repo,
        record.problem_statement,
        record.requirements,
        record.interface
    )
    .to_lowercase()
}
