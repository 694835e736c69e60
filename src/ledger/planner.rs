//! Planning the definition split behind a recurring amount change.
//!
//! Changing a recurring definition's amount effective a future date must not
//! rewrite history, so the change is modeled as two writes: truncate the
//! original definition the day before the effective date, and insert a
//! replacement carrying the new amount from the effective date onward.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dates::{day_after, day_before, parse_day};
use crate::errors::FinanceError;

use super::definition::TransactionDefinition;

/// The two-write transaction for a recurring amount change.
///
/// Callers must apply both definitions as one logical operation against the
/// backing store. If the second write fails after the first succeeded, the
/// store holds a truncated original with no replacement; re-deriving coverage
/// with [`RecurringEditPlan::is_contiguous`] against the persisted pair lets
/// callers surface that as a recoverable inconsistency.
#[derive(Debug, Clone)]
pub struct RecurringEditPlan {
    pub truncated_original: TransactionDefinition,
    pub replacement: TransactionDefinition,
}

impl RecurringEditPlan {
    /// True when the truncated definition ends exactly one day before the
    /// replacement starts, leaving no gap and no overlap in coverage.
    pub fn is_contiguous(&self) -> bool {
        match self.truncated_original.end_date {
            Some(end) => day_after(end) == self.replacement.start_date,
            None => false,
        }
    }
}

/// Computes the split for changing `original`'s amount to `new_amount` from
/// `effective_date` onward.
///
/// The effective date is direct user input: an unparseable value is a hard
/// [`FinanceError::InvalidDate`], and a date not strictly after the
/// original's start is [`FinanceError::InvalidEffectiveDate`]. Both are
/// rejected before any output exists, so no write is ever attempted for an
/// invalid edit.
pub fn plan_amount_change(
    original: &TransactionDefinition,
    new_amount: Decimal,
    effective_date: &str,
) -> Result<RecurringEditPlan, FinanceError> {
    let effective = parse_day(effective_date)?;
    if effective <= original.start_date {
        return Err(FinanceError::InvalidEffectiveDate {
            start: original.start_date,
            effective,
        });
    }
    if new_amount < Decimal::ZERO {
        return Err(FinanceError::InvalidAmount(new_amount.to_string()));
    }

    let mut truncated_original = original.clone();
    truncated_original.end_date = Some(day_before(effective));

    let mut replacement = original.clone();
    replacement.id = Uuid::new_v4();
    replacement.start_date = effective;
    replacement.end_date = None;
    replacement.amount = new_amount;

    Ok(RecurringEditPlan {
        truncated_original,
        replacement,
    })
}
