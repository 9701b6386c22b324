use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::logic::state::PipelineStatus;
use crate::models::pipelines::Pipeline as RawPipeline;
use crate::utils::colors::paint_opt;

const SHA_EDGE: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Pipeline {
    raw: RawPipeline,
}

impl From<RawPipeline> for Pipeline {
    fn from(raw: RawPipeline) -> Self {
        Self { raw }
    }
}

impl Pipeline {
    pub fn raw(&self) -> &RawPipeline {
        &self.raw
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn ref_name(&self) -> &str {
        &self.raw.ref_name
    }

    pub fn status(&self) -> &str {
        &self.raw.status
    }

    pub fn status_kind(&self) -> Option<PipelineStatus> {
        PipelineStatus::parse(&self.raw.status)
    }

    pub fn is_success(&self) -> bool {
        self.status_kind() == Some(PipelineStatus::Success)
    }

    pub fn is_failed(&self) -> bool {
        self.status_kind() == Some(PipelineStatus::Failed)
    }

    pub fn is_canceled(&self) -> bool {
        self.status_kind() == Some(PipelineStatus::Canceled)
    }

    pub fn is_running(&self) -> bool {
        self.status_kind() == Some(PipelineStatus::Running)
    }

    pub fn is_paused(&self) -> bool {
        self.status_kind() == Some(PipelineStatus::Paused)
    }

    pub fn status_text(&self) -> String {
        paint_opt(self.status(), self.status_kind().map(PipelineStatus::tone))
    }

    pub fn sha(&self) -> &str {
        &self.raw.sha
    }

    /// First and last five characters of the sha, e.g. `8d2c0...f9a0b`.
    pub fn sha_short(&self) -> String {
        let chars: Vec<char> = self.raw.sha.chars().collect();
        if chars.len() <= SHA_EDGE * 2 {
            return self.raw.sha.clone();
        }
        let head: String = chars[..SHA_EDGE].iter().collect();
        let tail: String = chars[chars.len() - SHA_EDGE..].iter().collect();
        format!("{head}...{tail}")
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.raw.updated_at
    }

    pub fn web_url(&self) -> &str {
        &self.raw.web_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pipeline(status: &str, sha: &str) -> Pipeline {
        let raw: RawPipeline = serde_json::from_value(json!({
            "id": 5531,
            "project_id": 12,
            "ref": "v3.1.0",
            "status": status,
            "sha": sha,
            "created_at": "2024-04-02T09:30:00Z",
            "updated_at": "2024-04-02T09:42:00Z",
            "web_url": "https://gitlab.example.com/acme/shop/-/pipelines/5531"
        }))
        .unwrap();
        Pipeline::from(raw)
    }

    #[test]
    fn sha_is_shortened_to_both_ends() {
        let p = pipeline("success", "8d2c0a6e5f0d4b8c9a1e2f3a4b5c6d7e8f9a0b1c");
        assert_eq!(p.sha_short(), "8d2c0...a0b1c");
        assert_eq!(pipeline("success", "abc").sha_short(), "abc");
    }

    #[test]
    fn status_predicates() {
        assert!(pipeline("success", "a").is_success());
        assert!(pipeline("FAILED", "a").is_failed());
        assert!(pipeline("canceled", "a").is_canceled());
        assert!(pipeline("running", "a").is_running());
        assert!(pipeline("paused", "a").is_paused());
        assert_eq!(pipeline("manual", "a").status_kind(), None);
    }

    #[test]
    fn unknown_status_is_not_colored() {
        assert_eq!(pipeline("manual", "a").status_text(), "manual");
        assert_ne!(pipeline("failed", "a").status_text(), "failed");
    }

    #[test]
    fn fields_read_back_from_raw() {
        let p = pipeline("success", "a1");
        assert_eq!(p.id(), 5531);
        assert_eq!(p.ref_name(), "v3.1.0");
        assert_eq!(p.sha(), "a1");
        assert_eq!(p.web_url(), "https://gitlab.example.com/acme/shop/-/pipelines/5531");
        assert!(p.created_at() < p.updated_at());
    }
}
