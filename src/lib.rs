//! Client for the GitLab REST API: typed records, derived views and the
//! queries behind the `gitlab-cli` commands.

pub mod args;
pub mod client;
pub mod commands;
pub mod error;
pub mod logic;
pub mod models;
pub mod render;
pub mod service;
pub mod utils;

pub use client::{ClientConfig, HttpTransport, Transport};
pub use error::{Error, ResourceKind, Result, SwapStage};
pub use service::GitlabService;
