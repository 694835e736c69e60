//! Grouping of monthly occurrences by category and payment method.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::definition::TransactionKind;
use super::occurrence::TransactionOccurrence;

/// Bucket label applied when an occurrence carries no category or payment
/// method, or one missing from the caller's reference list.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodTotal {
    pub name: String,
    pub amount: Decimal,
    pub count: usize,
}

/// Expense totals per category, seeded from the caller's reference list.
/// Unknown and missing categories fall into [`UNCATEGORIZED`] rather than
/// erroring, and buckets that stayed at zero are dropped from the result.
pub fn category_totals(
    occurrences: &[TransactionOccurrence],
    known_categories: &[String],
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = known_categories
        .iter()
        .map(|name| CategoryTotal {
            name: name.clone(),
            amount: Decimal::ZERO,
            count: 0,
        })
        .collect();

    for occurrence in occurrences {
        if occurrence.kind != TransactionKind::Expense {
            continue;
        }
        let name = occurrence
            .category
            .as_deref()
            .filter(|category| known_categories.iter().any(|known| known == category))
            .unwrap_or(UNCATEGORIZED);
        accumulate(&mut totals, name, occurrence.amount);
    }

    totals.retain(|total| total.amount > Decimal::ZERO);
    totals
}

/// Totals per payment method over all occurrences, income and expense alike.
/// Every known method stays in the output even at zero, so charts keep a
/// stable shape from month to month.
pub fn payment_method_totals(
    occurrences: &[TransactionOccurrence],
    known_methods: &[String],
) -> Vec<PaymentMethodTotal> {
    let mut totals: Vec<PaymentMethodTotal> = known_methods
        .iter()
        .map(|name| PaymentMethodTotal {
            name: name.clone(),
            amount: Decimal::ZERO,
            count: 0,
        })
        .collect();

    for occurrence in occurrences {
        let name = occurrence
            .payment_method
            .as_deref()
            .filter(|method| known_methods.iter().any(|known| known == method))
            .unwrap_or(UNCATEGORIZED);
        accumulate_methods(&mut totals, name, occurrence.amount);
    }

    totals
}

fn accumulate(totals: &mut Vec<CategoryTotal>, name: &str, amount: Decimal) {
    match totals.iter_mut().find(|total| total.name == name) {
        Some(total) => {
            total.amount += amount;
            total.count += 1;
        }
        None => totals.push(CategoryTotal {
            name: name.to_string(),
            amount,
            count: 1,
        }),
    }
}

fn accumulate_methods(totals: &mut Vec<PaymentMethodTotal>, name: &str, amount: Decimal) {
    match totals.iter_mut().find(|total| total.name == name) {
        Some(total) => {
            total.amount += amount;
            total.count += 1;
        }
        None => totals.push(PaymentMethodTotal {
            name: name.to_string(),
            amount,
            count: 1,
        }),
    }
}
