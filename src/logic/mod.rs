//! View models: each wraps one wire record and adds derived fields.
//!
//! Accessors never touch the terminal; rendering lives in `crate::render`.

pub mod issue;
pub mod label;
pub mod merge_request;
pub mod milestone;
pub mod package;
pub mod pipeline;
pub mod project;
pub mod release;
pub mod state;
pub mod tag;

pub use issue::Issue;
pub use label::Label;
pub use merge_request::MergeRequest;
pub use milestone::Milestone;
pub use package::{Package, PackageFile, PackageInfo};
pub use pipeline::Pipeline;
pub use project::Project;
pub use release::{Release, ReleaseAssetLink};
pub use state::{IssueState, MergeRequestState, MilestoneState, PipelineStatus};
pub use tag::{Commit, Tag};
