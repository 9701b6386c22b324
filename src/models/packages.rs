use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageInfo {
    pub id: u64,

    pub name: String,

    pub version: String,

    pub package_type: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageFile {
    pub id: u64,

    pub file_name: String,

    pub size: u64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
