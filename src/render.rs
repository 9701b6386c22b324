//! Terminal rendering of view models.

use std::fmt;

use crate::logic::{
    Issue, Label, MergeRequest, Milestone, Package, PackageFile, PackageInfo, Pipeline, Project,
    Release, ReleaseAssetLink, Tag,
};
use crate::utils::colors::{Tone, paint};
use crate::utils::dates::{date_time_of, day_of, day_of_timestamp};

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[id:{}] : {} - {}", self.id(), self.name(), self.path_with_namespace())
    }
}

fn due_suffix(due_date: Option<chrono::NaiveDate>, days_text: String, late: bool) -> String {
    match due_date {
        Some(due) if late => format!(" - due {} ({})", day_of(Some(due)), paint(&days_text, Tone::Red)),
        Some(due) => format!(" - due {} ({})", day_of(Some(due)), days_text),
        None => String::new(),
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[#{}] ({}) - {}", self.iid(), self.state_text(), self.title())?;
        if self.is_opened() {
            f.write_str(&due_suffix(self.due_date(), self.days_to_end_text(), self.is_late()))?;
        }
        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[id:{}] ({}) - {}", self.id(), self.state_text(), self.display_title())?;
        if self.is_active() {
            f.write_str(&due_suffix(self.due_date(), self.days_to_end_text(), self.is_late()))?;
        }
        Ok(())
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) - {} - {}",
            self.name(),
            self.tag_name(),
            self.description(),
            day_of_timestamp(self.released_at())
        )
    }
}

impl fmt::Display for ReleaseAssetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[link #{}] {} - {}", self.id(), self.name(), paint(self.url(), Tone::Cyan))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let commit = self.commit();
        write!(
            f,
            "[{}] - {} - {} ({})",
            self.name(),
            self.message(),
            date_time_of(commit.committed_at()),
            commit.short_id()
        )
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} ({}) - {} - {} - {}",
            self.id(),
            self.ref_name(),
            self.status_text(),
            self.sha_short(),
            date_time_of(self.created_at()),
            paint(self.web_url(), Tone::Cyan)
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[label #{}] {}", self.id(), self.name())?;
        if let Some(priority) = self.priority() {
            write!(f, " ({priority})")?;
        }
        Ok(())
    }
}

impl fmt::Display for MergeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[MergeRequest #{} :: {}] {} - ({}) - [{}]",
            self.id(),
            self.author_username(),
            self.title(),
            self.directions_text(),
            self.state_text()
        )
    }
}

impl fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Package #{}] {} {} ({})",
            self.id(),
            self.name(),
            self.version(),
            self.package_type()
        )
    }
}

impl fmt::Display for PackageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[File #{}] {} ({:.2} kb) - {} - {}",
            self.id(),
            self.file_name(),
            self.size_kb(),
            date_time_of(self.created_at()),
            paint(self.web_url(), Tone::Cyan)
        )
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())?;
        for file in self.files() {
            write!(f, "\n     * {file}")?;
        }
        Ok(())
    }
}
