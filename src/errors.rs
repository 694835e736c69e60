use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures validation failures at the crate's construction
/// boundaries. Calculation functions never return it; they degrade gracefully
/// on partial data instead.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("invalid date: '{0}' is not a calendar day")]
    InvalidDate(String),
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("effective date {effective} must fall strictly after the start date {start}")]
    InvalidEffectiveDate {
        start: NaiveDate,
        effective: NaiveDate,
    },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
