use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::logic::milestone::Milestone;
use crate::logic::state::IssueState;
use crate::models::issues::Issue as RawIssue;
use crate::models::users::User;
use crate::utils::colors::paint_opt;
use crate::utils::constants::NO_TITLE;
use crate::utils::{dates, or_placeholder};

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Issue {
    raw: RawIssue,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Self { raw }
    }
}

impl Issue {
    pub fn raw(&self) -> &RawIssue {
        &self.raw
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn iid(&self) -> u64 {
        self.raw.iid
    }

    pub fn title(&self) -> &str {
        or_placeholder(self.raw.title.as_deref(), NO_TITLE)
    }

    pub fn state(&self) -> &str {
        &self.raw.state
    }

    pub fn state_kind(&self) -> Option<IssueState> {
        IssueState::parse(&self.raw.state)
    }

    pub fn is_opened(&self) -> bool {
        self.state_kind() == Some(IssueState::Opened)
    }

    pub fn is_closed(&self) -> bool {
        self.state_kind() == Some(IssueState::Closed)
    }

    pub fn state_text(&self) -> String {
        paint_opt(self.state(), self.state_kind().map(IssueState::tone))
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.raw.due_date
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.raw.closed_at
    }

    pub fn labels(&self) -> &[String] {
        &self.raw.labels
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.raw.labels.iter().any(|l| l == label)
    }

    pub fn assignees(&self) -> &[User] {
        &self.raw.assignees
    }

    pub fn milestone(&self) -> Option<Milestone> {
        self.raw.milestone.clone().map(Milestone::from)
    }

    pub fn web_url(&self) -> &str {
        &self.raw.web_url
    }

    /// Open and past its due date. Issues without a due date never are.
    pub fn is_late_on(&self, today: NaiveDate) -> bool {
        self.is_opened() && dates::effective_due_date(self.due_date(), today) < today
    }

    pub fn is_late(&self) -> bool {
        self.is_late_on(dates::today())
    }

    pub fn days_to_end_on(&self, today: NaiveDate) -> i64 {
        dates::days_to_end(self.due_date(), today)
    }

    pub fn days_to_end(&self) -> i64 {
        self.days_to_end_on(dates::today())
    }

    pub fn days_to_end_text(&self) -> String {
        dates::days_to_end_text(self.days_to_end())
    }
}
