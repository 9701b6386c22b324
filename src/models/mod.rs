//! Wire records returned by the GitLab REST API, before any derived logic.

pub mod issues;
pub mod labels;
pub mod merge_requests;
pub mod milestones;
pub mod packages;
pub mod pipelines;
pub mod projects;
pub mod releases;
pub mod tags;
pub mod users;
