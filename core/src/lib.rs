//! Data layer for the deepdive instance browser: the record model, the
//! dataset loader with its derived metadata, the filter engine, and the
//! unified-diff line classifier. Nothing in this crate touches the
//! terminal.

mod dataset;
mod diff;
mod filter;
mod normalize;
mod record;

pub use dataset::Dataset;
pub use dataset::DatasetError;
pub use diff::DiffLine;
pub use diff::DiffLineKind;
pub use diff::classify_patch;
pub use filter::FilterParams;
pub use filter::apply_filters;
pub use normalize::normalize_list;
pub use record::TaskRecord;
pub use record::commit_url;
pub use record::short_id;
