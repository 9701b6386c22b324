//! Error type shared by the transport, the query layer and the CLI.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Resource kinds that can be looked up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Project,
    Milestone,
    Release,
    Tag,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Project => "project",
            Self::Milestone => "milestone",
            Self::Release => "release",
            Self::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Step of a label swap that did not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStage {
    /// Nothing changed on the remote; the add step was skipped.
    Remove,
    /// The old label is gone but the new one was not added.
    Add,
}

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove => f.write_str("removing the old label failed, nothing was changed"),
            Self::Add => f.write_str("the old label was removed but adding the new one failed"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The connection could not be established or the body could not be read.
    #[error("network error on {path}: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-2xx status.
    #[error("request to {path} failed with HTTP {status}")]
    Transport { status: u16, path: String },

    /// The body did not match the expected wire shape.
    #[error("unexpected payload from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A name-based lookup found no exact match.
    #[error("{kind} {key} not found")]
    NotFound { kind: ResourceKind, key: String },

    /// A label swap stopped half way, or never started.
    #[error("label swap on issue #{iid}: {stage}")]
    PartialMutation {
        stage: SwapStage,
        iid: u64,
        #[source]
        cause: Option<Box<Error>>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn not_found(kind: ResourceKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// HTTP status carried by a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
