use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::milestones::Milestone;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Release {
    pub name: String,

    pub tag_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub released_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub milestones: Vec<Milestone>,

    #[serde(default)]
    pub assets: ReleaseAssets,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReleaseAssets {
    #[serde(default)]
    pub links: Vec<ReleaseAssetLink>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseAssetLink {
    pub id: u64,

    pub name: String,

    pub url: String,

    #[serde(default)]
    pub external: bool,

    #[serde(default)]
    pub link_type: Option<String>,
}
