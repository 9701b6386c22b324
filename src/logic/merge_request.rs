use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::logic::state::MergeRequestState;
use crate::models::merge_requests::MergeRequest as RawMergeRequest;
use crate::models::users::User;
use crate::utils::colors::paint_opt;
use crate::utils::constants::{NO_DESCRIPTION, NO_TITLE};
use crate::utils::or_placeholder;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct MergeRequest {
    raw: RawMergeRequest,
}

impl From<RawMergeRequest> for MergeRequest {
    fn from(raw: RawMergeRequest) -> Self {
        Self { raw }
    }
}

impl MergeRequest {
    pub fn raw(&self) -> &RawMergeRequest {
        &self.raw
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn iid(&self) -> u64 {
        self.raw.iid
    }

    pub fn title(&self) -> &str {
        or_placeholder(self.raw.title.as_deref(), NO_TITLE)
    }

    pub fn description(&self) -> &str {
        or_placeholder(self.raw.description.as_deref(), NO_DESCRIPTION)
    }

    pub fn author(&self) -> Option<&User> {
        self.raw.author.as_ref()
    }

    pub fn author_username(&self) -> &str {
        self.author().map(|a| a.username.as_str()).unwrap_or("?")
    }

    pub fn state(&self) -> &str {
        &self.raw.state
    }

    pub fn state_kind(&self) -> Option<MergeRequestState> {
        MergeRequestState::parse(&self.raw.state)
    }

    pub fn is_opened(&self) -> bool {
        self.state_kind() == Some(MergeRequestState::Opened)
    }

    pub fn is_closed(&self) -> bool {
        self.state_kind() == Some(MergeRequestState::Closed)
    }

    pub fn is_merged(&self) -> bool {
        self.state_kind() == Some(MergeRequestState::Merged)
    }

    pub fn state_text(&self) -> String {
        paint_opt(self.state(), self.state_kind().map(MergeRequestState::tone))
    }

    pub fn source_branch(&self) -> &str {
        &self.raw.source_branch
    }

    pub fn target_branch(&self) -> &str {
        &self.raw.target_branch
    }

    pub fn directions_text(&self) -> String {
        format!("{} --> {}", self.source_branch(), self.target_branch())
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.raw.updated_at
    }

    pub fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.raw.merged_at
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.raw.closed_at
    }
}
