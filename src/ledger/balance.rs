//! Folding occurrences into closing balances, monthly summaries, and the
//! daily running-balance series behind the dashboard chart.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dates::{day_before, days_in_month, month_end, month_start, same_month};

use super::definition::{TransactionDefinition, TransactionKind};
use super::occurrence::TransactionOccurrence;
use super::recurring::expand;

/// Income, expense, and closing balance for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBalanceSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub previous_month_closing_balance: Decimal,
    pub net_change: Decimal,
}

/// Running balance through one day of the displayed month. `income` and
/// `expense` are that day's totals only, not cumulative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBalancePoint {
    pub day: u32,
    pub date: NaiveDate,
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Closing balance at the end of the month before `reference`'s month: every
/// occurrence in history strictly before the month's first day, summed
/// signed. No definitions means a zero carry-forward.
pub fn previous_month_closing_balance(
    definitions: &[TransactionDefinition],
    reference: NaiveDate,
) -> Decimal {
    let month_first = month_start(reference);
    expand(definitions, day_before(month_first), true, None)
        .iter()
        .filter(|occurrence| occurrence.date < month_first)
        .fold(Decimal::ZERO, |balance, occurrence| {
            balance + occurrence.signed_amount()
        })
}

/// Occurrences falling within `reference`'s calendar month, sorted by date.
pub fn month_occurrences(
    definitions: &[TransactionDefinition],
    reference: NaiveDate,
) -> Vec<TransactionOccurrence> {
    let mut occurrences: Vec<TransactionOccurrence> =
        expand(definitions, month_end(reference), false, None)
            .into_iter()
            .filter(|occurrence| same_month(occurrence.date, reference))
            .collect();
    occurrences.sort_by_key(|occurrence| occurrence.date);
    occurrences
}

/// Sums one month's occurrences into a closing-balance summary.
pub fn monthly_summary(
    occurrences: &[TransactionOccurrence],
    previous_closing: Decimal,
) -> MonthlyBalanceSummary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for occurrence in occurrences {
        match occurrence.kind {
            TransactionKind::Income => income += occurrence.amount,
            TransactionKind::Expense => expense += occurrence.amount,
        }
    }
    let net_change = income - expense;
    MonthlyBalanceSummary {
        income,
        expense,
        balance: previous_closing + net_change,
        previous_month_closing_balance: previous_closing,
        net_change,
    }
}

/// One point per day of `reference`'s month, accumulating the running balance
/// from the previous month's closing balance. Occurrences outside the month
/// are ignored.
pub fn daily_series(
    occurrences: &[TransactionOccurrence],
    reference: NaiveDate,
    previous_closing: Decimal,
) -> Vec<DailyBalancePoint> {
    let year = reference.year();
    let month = reference.month();
    let mut sorted: Vec<&TransactionOccurrence> = occurrences.iter().collect();
    sorted.sort_by_key(|occurrence| occurrence.date);

    let total_days = days_in_month(year, month);
    let mut points = Vec::with_capacity(total_days as usize);
    let mut balance = previous_closing;
    let mut index = 0;

    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        while index < sorted.len() && sorted[index].date < date {
            index += 1;
        }
        let mut day_income = Decimal::ZERO;
        let mut day_expense = Decimal::ZERO;
        while index < sorted.len() && sorted[index].date == date {
            let occurrence = sorted[index];
            match occurrence.kind {
                TransactionKind::Income => {
                    balance += occurrence.amount;
                    day_income += occurrence.amount;
                }
                TransactionKind::Expense => {
                    balance -= occurrence.amount;
                    day_expense += occurrence.amount;
                }
            }
            index += 1;
        }
        points.push(DailyBalancePoint {
            day,
            date,
            balance,
            income: day_income,
            expense: day_expense,
        });
    }
    points
}
