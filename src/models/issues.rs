use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::milestones::Milestone;
use crate::models::users::User;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Issue {
    pub id: u64,

    pub iid: u64,

    #[serde(default)]
    pub title: Option<String>,

    pub state: String,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub assignees: Vec<User>,

    #[serde(default)]
    pub milestone: Option<Milestone>,

    #[serde(default)]
    pub web_url: String,
}
