use chrono::NaiveDate;
use serde::Serialize;

use crate::logic::state::MilestoneState;
use crate::models::milestones::Milestone as RawMilestone;
use crate::utils::colors::paint_opt;
use crate::utils::constants::{NO_DESCRIPTION, NO_TITLE};
use crate::utils::{dates, or_placeholder};

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Milestone {
    raw: RawMilestone,
}

impl From<RawMilestone> for Milestone {
    fn from(raw: RawMilestone) -> Self {
        Self { raw }
    }
}

impl Milestone {
    pub fn raw(&self) -> &RawMilestone {
        &self.raw
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn iid(&self) -> u64 {
        self.raw.iid
    }

    /// Raw title, used as the lookup key.
    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn display_title(&self) -> &str {
        or_placeholder(Some(self.raw.title.as_str()), NO_TITLE)
    }

    pub fn description(&self) -> &str {
        or_placeholder(self.raw.description.as_deref(), NO_DESCRIPTION)
    }

    pub fn state(&self) -> &str {
        &self.raw.state
    }

    pub fn state_kind(&self) -> Option<MilestoneState> {
        MilestoneState::parse(&self.raw.state)
    }

    pub fn is_active(&self) -> bool {
        self.state_kind() == Some(MilestoneState::Active)
    }

    pub fn is_closed(&self) -> bool {
        self.state_kind() == Some(MilestoneState::Closed)
    }

    pub fn state_text(&self) -> String {
        paint_opt(self.state(), self.state_kind().map(MilestoneState::tone))
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.raw.start_date
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.raw.due_date
    }

    pub fn is_late_on(&self, today: NaiveDate) -> bool {
        self.is_active() && dates::effective_due_date(self.due_date(), today) < today
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
