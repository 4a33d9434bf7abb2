/// Syntactic role of one line in a unified-diff blob. Classification is
/// purely prefix-based; no patch syntax beyond that is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffLineKind {
    FileHeader,
    HunkHeader,
    Addition,
    Deletion,
    Context,
    /// Stand-in emitted when there is no patch text at all.
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
}

/// Splits a patch blob into classified lines, preserving every line
/// verbatim (empty lines included). Empty input yields a single
/// placeholder line.
pub fn classify_patch(patch: &str) -> Vec<DiffLine> {
    if patch.is_empty() {
        return vec![DiffLine {
            kind: DiffLineKind::Placeholder,
            text: "No patch data".to_string(),
        }];
    }
    patch
        .split('\n')
        .map(|line| DiffLine {
            kind: classify_line(line),
            text: line.to_string(),
        })
        .collect()
}

fn classify_line(line: &str) -> DiffLineKind {
    // `+++`/`---` must win over the bare `+`/`-` prefixes.
    if line.starts_with("+++") || line.starts_with("---") {
        DiffLineKind::FileHeader
    } else if line.starts_with("@@") {
        DiffLineKind::HunkHeader
    } else if line.starts_with('+') {
        DiffLineKind::Addition
    } else if line.starts_with('-') {
        DiffLineKind::Deletion
    } else {
        DiffLineKind::Context
    }
}
