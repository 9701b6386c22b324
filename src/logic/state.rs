//! State classification shared by the view models.
//!
//! States are compared after trimming and ignoring case; anything the API
//! returns that is not listed here classifies as `None` and is shown as is.

use crate::utils::colors::Tone;

fn normalize(state: &str) -> String {
    state.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    Opened,
    Closed,
}

impl IssueState {
    pub fn parse(state: &str) -> Option<Self> {
        match normalize(state).as_str() {
            "opened" => Some(Self::Opened),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Opened => Tone::Red,
            Self::Closed => Tone::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneState {
    Active,
    Closed,
}

impl MilestoneState {
    pub fn parse(state: &str) -> Option<Self> {
        match normalize(state).as_str() {
            "active" => Some(Self::Active),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Yellow,
            Self::Closed => Tone::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRequestState {
    Opened,
    Closed,
    Merged,
}

impl MergeRequestState {
    pub fn parse(state: &str) -> Option<Self> {
        match normalize(state).as_str() {
            "opened" => Some(Self::Opened),
            "closed" => Some(Self::Closed),
            "merged" => Some(Self::Merged),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Opened => Tone::Yellow,
            Self::Closed | Self::Merged => Tone::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    Success,
    Failed,
    Canceled,
    Running,
    Paused,
}

impl PipelineStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match normalize(status).as_str() {
            "success" => Some(Self::Success),
            "failed" => Some(Self::Failed),
            "canceled" => Some(Self::Canceled),
            "running" => Some(Self::Running),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Failed => Tone::Red,
            Self::Canceled | Self::Paused => Tone::Yellow,
            Self::Success => Tone::Green,
            Self::Running => Tone::Cyan,
        }
    }
}
