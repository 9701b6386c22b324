use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub path: String,

    pub path_with_namespace: String,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub web_url: String,

    #[serde(default)]
    pub ssh_url_to_repo: Option<String>,

    #[serde(default)]
    pub http_url_to_repo: Option<String>,
}
