use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::tags::{Commit as RawCommit, Tag as RawTag};
use crate::utils::constants::NO_MESSAGE;
use crate::utils::or_placeholder;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Tag {
    raw: RawTag,
}

impl From<RawTag> for Tag {
    fn from(raw: RawTag) -> Self {
        Self { raw }
    }
}

impl Tag {
    pub fn raw(&self) -> &RawTag {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn message(&self) -> &str {
        or_placeholder(self.raw.message.as_deref(), NO_MESSAGE)
    }

    pub fn target(&self) -> Option<&str> {
        self.raw.target.as_deref()
    }

    pub fn commit(&self) -> Commit {
        Commit::from(self.raw.commit.clone())
    }

    /// Most recent commit first, ties fall back to the tag name.
    pub fn newest_first(a: &Tag, b: &Tag) -> Ordering {
        b.raw
            .commit
            .committed_date
            .cmp(&a.raw.commit.committed_date)
            .then_with(|| a.name().cmp(b.name()))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Commit {
    raw: RawCommit,
}

impl From<RawCommit> for Commit {
    fn from(raw: RawCommit) -> Self {
        Self { raw }
    }
}

impl Commit {
    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn short_id(&self) -> &str {
        self.raw.short_id.as_deref().unwrap_or(&self.raw.id)
    }

    pub fn author_name(&self) -> &str {
        self.raw.author_name.as_deref().unwrap_or("?")
    }

    pub fn committed_at(&self) -> Option<DateTime<Utc>> {
        self.raw.committed_date
    }
}
