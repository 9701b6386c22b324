use chrono::{DateTime, Days, Local, NaiveDate, Utc};

use crate::utils::constants::{DAYS_THRESHOLD, DUE_DATE_SENTINEL_DAYS};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Due date to compare against, far in the future when none is set.
pub fn effective_due_date(due_date: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    due_date.unwrap_or_else(|| {
        today
            .checked_add_days(Days::new(DUE_DATE_SENTINEL_DAYS))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Signed whole days from `today` to the due date; negative once overdue.
pub fn days_to_end(due_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    (effective_due_date(due_date, today) - today).num_days()
}

pub fn days_to_end_text(days: i64) -> String {
    match days {
        d if d > DAYS_THRESHOLD => format!(">{DAYS_THRESHOLD} days left"),
        d if d < -DAYS_THRESHOLD => format!(">{DAYS_THRESHOLD} days late"),
        d if d < 0 => format!("{} days late", -d),
        d => format!("{d} days left"),
    }
}

pub fn day_of(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "?".to_string(),
    }
}

pub fn day_of_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    day_of(timestamp.map(|t| t.with_timezone(&Local).date_naive()))
}

pub fn date_time_of(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(t) => t.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
        None => "?".to_string(),
    }
}
