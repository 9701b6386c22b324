use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    pub commit: Commit,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Commit {
    pub id: String,

    #[serde(default)]
    pub short_id: Option<String>,

    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub committed_date: Option<DateTime<Utc>>,
}
