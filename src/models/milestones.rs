use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Milestone {
    pub id: u64,

    pub iid: u64,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub state: String,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
