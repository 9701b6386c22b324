use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pipeline {
    pub id: u64,

    #[serde(default)]
    pub project_id: Option<u64>,

    #[serde(rename = "ref")]
    pub ref_name: String,

    pub status: String,

    pub sha: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub web_url: String,
}
