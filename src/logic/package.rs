use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::packages::{PackageFile as RawPackageFile, PackageInfo as RawPackageInfo};

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PackageInfo {
    raw: RawPackageInfo,
}

impl From<RawPackageInfo> for PackageInfo {
    fn from(raw: RawPackageInfo) -> Self {
        Self { raw }
    }
}

impl PackageInfo {
    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn version(&self) -> &str {
        &self.raw.version
    }

    pub fn package_type(&self) -> &str {
        &self.raw.package_type
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw.created_at
    }
}

/// A package file with its download link inside the owning project.
#[derive(Debug, Clone, Serialize)]
pub struct PackageFile {
    #[serde(flatten)]
    raw: RawPackageFile,
    web_url: String,
}

impl PackageFile {
    pub fn new(raw: RawPackageFile, project_web_url: &str) -> Self {
        let web_url = format!(
            "{}/-/package_files/{}/download",
            project_web_url.trim_end_matches('/'),
            raw.id
        );
        Self { raw, web_url }
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn file_name(&self) -> &str {
        &self.raw.file_name
    }

    pub fn size(&self) -> u64 {
        self.raw.size
    }

    pub fn size_kb(&self) -> f64 {
        self.raw.size as f64 / 1024.0
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw.created_at
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Package {
    info: PackageInfo,
    files: Vec<PackageFile>,
}

impl Package {
    pub fn new(info: PackageInfo, files: Vec<PackageFile>) -> Self {
        Self { info, files }
    }

    pub fn info(&self) -> &PackageInfo {
        &self.info
    }

    pub fn files(&self) -> &[PackageFile] {
        &self.files
    }
}
