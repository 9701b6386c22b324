use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::logic::milestone::Milestone;
use crate::models::releases::{Release as RawRelease, ReleaseAssetLink as RawAssetLink};
use crate::utils::constants::NO_DESCRIPTION;
use crate::utils::or_placeholder;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Release {
    raw: RawRelease,
}

impl From<RawRelease> for Release {
    fn from(raw: RawRelease) -> Self {
        Self { raw }
    }
}

impl Release {
    pub fn raw(&self) -> &RawRelease {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn tag_name(&self) -> &str {
        &self.raw.tag_name
    }

    pub fn description(&self) -> &str {
        or_placeholder(self.raw.description.as_deref(), NO_DESCRIPTION)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw.created_at
    }

    pub fn released_at(&self) -> Option<DateTime<Utc>> {
        self.raw.released_at
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        self.raw.milestones.iter().cloned().map(Milestone::from).collect()
    }

    pub fn asset_links(&self) -> Vec<ReleaseAssetLink> {
        self.raw.assets.links.iter().cloned().map(ReleaseAssetLink::from).collect()
    }

    /// Oldest release first; unreleased entries go last, ties fall back to the name.
    pub fn chronological(a: &Release, b: &Release) -> Ordering {
        match (a.released_at(), b.released_at()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| a.name().cmp(b.name()))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ReleaseAssetLink {
    raw: RawAssetLink,
}

impl From<RawAssetLink> for ReleaseAssetLink {
    fn from(raw: RawAssetLink) -> Self {
        Self { raw }
    }
}

impl ReleaseAssetLink {
    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn url(&self) -> &str {
        &self.raw.url
    }

    pub fn is_external(&self) -> bool {
        self.raw.external
    }

    pub fn link_type(&self) -> Option<&str> {
        self.raw.link_type.as_deref()
    }
}
