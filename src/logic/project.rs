use serde::Serialize;

use crate::models::projects::Project as RawProject;
use crate::utils::constants::NO_DESCRIPTION;
use crate::utils::or_placeholder;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Project {
    raw: RawProject,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Self { raw }
    }
}

impl Project {
    pub fn raw(&self) -> &RawProject {
        &self.raw
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    /// Key used to resolve a project given on the command line.
    pub fn path(&self) -> &str {
        &self.raw.path
    }

    pub fn path_with_namespace(&self) -> &str {
        &self.raw.path_with_namespace
    }

    pub fn description(&self) -> &str {
        or_placeholder(self.raw.description.as_deref(), NO_DESCRIPTION)
    }

    pub fn default_branch(&self) -> Option<&str> {
        self.raw.default_branch.as_deref()
    }

    pub fn web_url(&self) -> &str {
        &self.raw.web_url
    }

    pub fn http_url_to_repo(&self) -> Option<&str> {
        self.raw.http_url_to_repo.as_deref()
    }

    pub fn ssh_url_to_repo(&self) -> Option<&str> {
        self.raw.ssh_url_to_repo.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_read_back_from_raw() {
        let raw: RawProject = serde_json::from_value(json!({
            "id": 12,
            "name": "Billing API",
            "description": null,
            "path": "billing-api",
            "path_with_namespace": "acme/billing-api",
            "default_branch": "main",
            "web_url": "https://gitlab.example.com/acme/billing-api",
            "ssh_url_to_repo": "git@gitlab.example.com:acme/billing-api.git",
            "http_url_to_repo": "https://gitlab.example.com/acme/billing-api.git"
        }))
        .unwrap();
        let project = Project::from(raw);

        assert_eq!(project.id(), 12);
        assert_eq!(project.name(), "Billing API");
        assert_eq!(project.path(), "billing-api");
        assert_eq!(project.path_with_namespace(), "acme/billing-api");
        assert_eq!(project.description(), "(no description)");
        assert_eq!(project.default_branch(), Some("main"));
        assert_eq!(
            project.ssh_url_to_repo(),
            Some("git@gitlab.example.com:acme/billing-api.git")
        );
    }
}
