//! Expansion of transaction definitions into dated occurrences.
//!
//! This is the single source of truth for where recurring cash flows land on
//! the calendar: balance aggregation, projections, and the security
//! classifier all fold over its output.

use chrono::NaiveDate;

use crate::dates::{shift_month, shift_year};

use super::definition::{Frequency, TransactionDefinition};
use super::occurrence::TransactionOccurrence;

/// Upper bound on occurrences generated per definition, so unbounded
/// recurrences always terminate. 1024 monthly steps is over 85 years, far
/// beyond any projection horizon.
pub const MAX_OCCURRENCES_PER_DEFINITION: usize = 1024;

/// Expands definitions into concrete occurrences up to `window_end`
/// (inclusive).
///
/// `window_start`, when given, is the emission lower bound. `include_past`
/// widens emission back through history to each definition's start date,
/// bypassing `window_start`; carry-forward balances use it to sum everything
/// that ever happened.
///
/// Occurrence *k* of a monthly definition falls on `start_date` shifted by
/// *k* calendar months, so the day-of-month is preserved from the original
/// start and clamped per target month (Jan 31 → Feb 29 → Mar 31), rather than
/// drifting to whatever the previous clamp produced. Yearly works the same
/// way over years.
///
/// Pure and idempotent; output ordering is unspecified, callers sort as
/// needed.
pub fn expand(
    definitions: &[TransactionDefinition],
    window_end: NaiveDate,
    include_past: bool,
    window_start: Option<NaiveDate>,
) -> Vec<TransactionOccurrence> {
    let floor = if include_past { None } else { window_start };
    let mut occurrences = Vec::new();
    for definition in definitions {
        expand_definition(definition, window_end, floor, &mut occurrences);
    }
    occurrences
}

fn expand_definition(
    definition: &TransactionDefinition,
    window_end: NaiveDate,
    floor: Option<NaiveDate>,
    out: &mut Vec<TransactionOccurrence>,
) {
    let start = definition.start_date;
    match definition.frequency {
        Frequency::Once => {
            if start <= window_end && floor.map_or(true, |f| start >= f) {
                out.push(TransactionOccurrence::from_definition(definition, start));
            }
        }
        Frequency::Monthly | Frequency::Yearly => {
            for step in 0..MAX_OCCURRENCES_PER_DEFINITION {
                let date = match definition.frequency {
                    Frequency::Monthly => shift_month(start, step as i32),
                    _ => shift_year(start, step as i32),
                };
                if date > window_end {
                    break;
                }
                if definition.end_date.map_or(false, |end| date > end) {
                    break;
                }
                if floor.map_or(true, |f| date >= f) {
                    out.push(TransactionOccurrence::from_definition(definition, date));
                }
            }
        }
    }
}
