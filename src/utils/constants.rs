pub const API_ROOT: &str = "/api/v4";

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Beyond this many days the remaining time is only shown as `>N`.
pub const DAYS_THRESHOLD: i64 = 30;

/// Offset used in place of a missing due date.
pub const DUE_DATE_SENTINEL_DAYS: u64 = 365;

pub const NO_DESCRIPTION: &str = "(no description)";
pub const NO_MESSAGE: &str = "(no message)";
pub const NO_TITLE: &str = "(no title)";
