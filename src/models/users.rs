use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    pub username: String,
}
