//! Forward projection of the balance trajectory: negative-balance detection
//! and plan-progress snapshots.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::day_after;
use crate::ledger::definition::TransactionDefinition;
use crate::ledger::plan::Plan;
use crate::ledger::recurring::expand;

/// Default forward search window: five years. Unbounded recurring definitions
/// make the trajectory infinite, so the search must stop somewhere; the exact
/// bound is a tunable, not load-bearing semantics.
pub const DEFAULT_HORIZON_DAYS: i64 = 1825;

/// The first projected day the running balance drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativeBalanceProjection {
    pub date: NaiveDate,
    /// Days from "today" (the invocation date) to `date`, not from the
    /// projection start.
    pub days_remaining: i64,
    pub balance: Decimal,
}

/// Steps the balance forward from the day after `start_date`, applying each
/// day's occurrences in date order, and stops at the first day the running
/// balance goes negative.
///
/// `starting_balance` is taken to already include `start_date`'s own flows
/// (callers hand in a closing balance). Returns `None` when `horizon_days`
/// are exhausted without the balance going negative; horizon exhaustion is
/// never an error.
pub fn find_negative_balance_date(
    definitions: &[TransactionDefinition],
    starting_balance: Decimal,
    start_date: NaiveDate,
    today: NaiveDate,
    horizon_days: i64,
) -> Option<NegativeBalanceProjection> {
    let first_day = day_after(start_date);
    let horizon_end = start_date + Duration::days(horizon_days.max(0));
    let occurrences = expand(definitions, horizon_end, false, Some(first_day));

    let mut deltas_by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for occurrence in &occurrences {
        *deltas_by_day.entry(occurrence.date).or_insert(Decimal::ZERO) +=
            occurrence.signed_amount();
    }

    let mut balance = starting_balance;
    for (date, delta) in deltas_by_day {
        balance += delta;
        if balance < Decimal::ZERO {
            return Some(NegativeBalanceProjection {
                date,
                days_remaining: (date - today).num_days(),
                balance,
            });
        }
    }
    tracing::debug!(horizon_days, "projection horizon exhausted without a negative balance");
    None
}

/// A plan's progress against the current month's closing balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProjection {
    pub plan_id: Uuid,
    pub name: String,
    pub target_amount: Decimal,
    /// 0-100 integer percentage.
    pub progress: u8,
}

/// Progress of each plan against `current_month_balance`.
pub fn project_plans(plans: &[Plan], current_month_balance: Decimal) -> Vec<PlanProjection> {
    plans
        .iter()
        .map(|plan| PlanProjection {
            plan_id: plan.id,
            name: plan.name.clone(),
            target_amount: plan.target_amount,
            progress: plan_progress(current_month_balance, plan.target_amount),
        })
        .collect()
}

/// `clamp(round(balance / target * 100), 0, 100)`, rounding halves away from
/// zero.
pub fn plan_progress(current_month_balance: Decimal, target_amount: Decimal) -> u8 {
    if target_amount <= Decimal::ZERO {
        return 0;
    }
    let percent = current_month_balance / target_amount * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(0)
}
