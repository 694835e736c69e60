use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::definition::{TransactionDefinition, TransactionKind};

/// One concrete dated instance materialized from a definition.
///
/// Occurrences are derived fresh on every query, never persisted and never
/// mutated. Several occurrences may share a `definition_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOccurrence {
    pub definition_id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl TransactionOccurrence {
    pub fn from_definition(definition: &TransactionDefinition, date: NaiveDate) -> Self {
        Self {
            definition_id: definition.id,
            date,
            amount: definition.amount,
            kind: definition.kind,
            category: definition.category.clone(),
            payment_method: definition.payment_method.clone(),
        }
    }

    /// Amount with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
