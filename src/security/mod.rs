//! Financial-security classification: how many months of average spending the
//! current balance covers, bucketed into qualitative bands.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dates::{day_before, month_index, month_start};
use crate::ledger::definition::{TransactionDefinition, TransactionKind};
use crate::ledger::recurring::expand;

/// One qualitative classification bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityBand {
    pub label: String,
    pub color: String,
    pub description: String,
}

/// Cut points and labels for the classification. Labels and colors are a
/// presentation concern, so callers may supply their own; the defaults are
/// the dashboard's original bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityBands {
    /// Upper ratio bound (inclusive) of the `low` band.
    pub low_max: Decimal,
    /// Upper ratio bound (inclusive) of the `medium` band.
    pub medium_max: Decimal,
    /// Upper ratio bound (inclusive) of the `good` band.
    pub good_max: Decimal,
    /// Ratio below zero.
    pub critical: SecurityBand,
    pub low: SecurityBand,
    pub medium: SecurityBand,
    pub good: SecurityBand,
    /// Ratio above `good_max`.
    pub excellent: SecurityBand,
    /// Used when the ratio is undefined (no expense history to average).
    pub unrated: SecurityBand,
}

static DEFAULT_BANDS: Lazy<SecurityBands> = Lazy::new(|| SecurityBands {
    low_max: Decimal::ONE,
    medium_max: Decimal::from(3),
    good_max: Decimal::from(6),
    critical: band(
        "Crítico",
        "#EF4444",
        "Seu saldo está negativo. Priorize reduzir despesas.",
    ),
    low: band(
        "Baixo",
        "#F97316",
        "Seu saldo cobre menos de um mês de gastos.",
    ),
    medium: band(
        "Médio",
        "#EAB308",
        "Seu saldo cobre de um a três meses de gastos.",
    ),
    good: band(
        "Bom",
        "#22C55E",
        "Seu saldo cobre de três a seis meses de gastos.",
    ),
    excellent: band(
        "Excelente",
        "#3B82F6",
        "Seu saldo cobre mais de seis meses de gastos.",
    ),
    unrated: band(
        "Sem histórico",
        "#9CA3AF",
        "Registre despesas para calcular sua segurança financeira.",
    ),
});

fn band(label: &str, color: &str, description: &str) -> SecurityBand {
    SecurityBand {
        label: label.to_string(),
        color: color.to_string(),
        description: description.to_string(),
    }
}

impl Default for SecurityBands {
    fn default() -> Self {
        DEFAULT_BANDS.clone()
    }
}

/// The classification result handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSecurityInfo {
    pub category: String,
    pub color: String,
    pub description: String,
}

/// Average monthly expense over all history strictly before `today`'s month:
/// total expense amount divided by the count of distinct calendar months
/// spanned between the earliest and latest expense occurrence (minimum
/// divisor 1, so a single month of history divides by one). No expense
/// history yields zero.
pub fn average_monthly_expense(
    definitions: &[TransactionDefinition],
    today: NaiveDate,
) -> Decimal {
    let current_month_first = month_start(today);
    let history_end = day_before(current_month_first);
    if history_end >= current_month_first {
        return Decimal::ZERO;
    }

    let mut total = Decimal::ZERO;
    let mut earliest: Option<i32> = None;
    let mut latest: Option<i32> = None;
    for occurrence in expand(definitions, history_end, true, None) {
        if occurrence.kind != TransactionKind::Expense || occurrence.date >= current_month_first {
            continue;
        }
        total += occurrence.amount;
        let month = month_index(occurrence.date);
        earliest = Some(earliest.map_or(month, |e| e.min(month)));
        latest = Some(latest.map_or(month, |l| l.max(month)));
    }

    match (earliest, latest) {
        (Some(earliest), Some(latest)) => {
            let months = (latest - earliest + 1).max(1);
            total / Decimal::from(months)
        }
        _ => Decimal::ZERO,
    }
}

/// Months of average spending the balance covers. `None` when
/// `average_monthly_expense` is not positive, leaving the ratio undefined.
pub fn security_ratio(
    current_balance: Decimal,
    average_monthly_expense: Decimal,
) -> Option<Decimal> {
    if average_monthly_expense <= Decimal::ZERO {
        return None;
    }
    Some(current_balance / average_monthly_expense)
}

/// Buckets the balance-to-average-expense ratio into one of the configured
/// bands. An undefined ratio maps to the neutral `unrated` band.
pub fn classify(
    current_balance: Decimal,
    average_monthly_expense: Decimal,
    bands: &SecurityBands,
) -> FinancialSecurityInfo {
    let selected = match security_ratio(current_balance, average_monthly_expense) {
        None => &bands.unrated,
        Some(ratio) if ratio < Decimal::ZERO => &bands.critical,
        Some(ratio) if ratio <= bands.low_max => &bands.low,
        Some(ratio) if ratio <= bands.medium_max => &bands.medium,
        Some(ratio) if ratio <= bands.good_max => &bands.good,
        Some(_) => &bands.excellent,
    };
    FinancialSecurityInfo {
        category: selected.label.clone(),
        color: selected.color.clone(),
        description: selected.description.clone(),
    }
}
