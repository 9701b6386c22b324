use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::users::User;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MergeRequest {
    pub id: u64,

    pub iid: u64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub author: Option<User>,

    pub source_branch: String,

    pub target_branch: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}
