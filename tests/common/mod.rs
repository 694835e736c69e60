#![allow(dead_code)]

use chrono::NaiveDate;
use finance_core::ledger::{Frequency, TransactionDefinition, TransactionKind};
use rust_decimal::Decimal;

pub fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn income(
    description: &str,
    amount: &str,
    frequency: Frequency,
    start: NaiveDate,
) -> TransactionDefinition {
    TransactionDefinition::new(
        TransactionKind::Income,
        description,
        dec(amount),
        frequency,
        start,
        None,
    )
    .unwrap()
}

pub fn expense(
    description: &str,
    amount: &str,
    frequency: Frequency,
    start: NaiveDate,
) -> TransactionDefinition {
    TransactionDefinition::new(
        TransactionKind::Expense,
        description,
        dec(amount),
        frequency,
        start,
        None,
    )
    .unwrap()
}

pub fn expense_until(
    description: &str,
    amount: &str,
    frequency: Frequency,
    start: NaiveDate,
    end: NaiveDate,
) -> TransactionDefinition {
    TransactionDefinition::new(
        TransactionKind::Expense,
        description,
        dec(amount),
        frequency,
        start,
        Some(end),
    )
    .unwrap()
}
