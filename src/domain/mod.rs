//! Domain logic - pure release-note rules independent of git operations

pub mod branch;
pub mod commit;
pub mod issue;
pub mod range;
pub mod tag;

pub use branch::ReleaseBranch;
pub use issue::{IssueMatcher, IssueReference, TrackerLinks};
pub use range::CommitRange;
pub use tag::TagPrefix;
