use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::parse_day;
use crate::errors::FinanceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Monthly,
    Yearly,
}

/// A stored transaction describing one real or recurring cash flow.
///
/// The calculation layer treats definitions as immutable input; value changes
/// over time are modeled as separate chained definitions (see
/// [`crate::ledger::planner`]), never as per-occurrence overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDefinition {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl TransactionDefinition {
    /// Builds a validated definition. The amount must be non-negative (the
    /// sign is derived from `kind` at aggregation time) and `end_date`, when
    /// present, must not precede `start_date`. With [`Frequency::Once`] the
    /// end date carries no meaning and is ignored by expansion.
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Decimal,
        frequency: Frequency,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, FinanceError> {
        if amount < Decimal::ZERO {
            return Err(FinanceError::InvalidAmount(amount.to_string()));
        }
        if let Some(end) = end_date {
            if end < start_date {
                return Err(FinanceError::EndBeforeStart {
                    start: start_date,
                    end,
                });
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            amount,
            category: None,
            payment_method: None,
            frequency,
            start_date,
            end_date,
        })
    }

    /// Expense category label. Income definitions carry no category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = match self.kind {
            TransactionKind::Expense => Some(category.into()),
            TransactionKind::Income => None,
        };
        self
    }

    pub fn with_payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = Some(payment_method.into());
        self
    }
}

/// Repository-shaped row for a transaction definition, with dates in the
/// stored string form. Decoding is the place where bad stored data surfaces:
/// rows that fail validation are skipped and reported, never silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub name: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub periodicity: Frequency,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DefinitionRecord {
    pub fn into_definition(self) -> Result<TransactionDefinition, FinanceError> {
        let start_date = parse_day(&self.start_date)?;
        let end_date = match self.end_date.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_day(raw)?),
        };
        let mut definition = TransactionDefinition::new(
            self.kind,
            self.name,
            self.amount,
            self.periodicity,
            start_date,
            end_date,
        )?;
        definition.id = self.id;
        definition.category = match self.kind {
            TransactionKind::Expense => self.category,
            TransactionKind::Income => None,
        };
        definition.payment_method = self.payment_method;
        Ok(definition)
    }
}

/// A record excluded from calculation because its stored data failed
/// validation, kept so callers can surface a data-quality notice.
#[derive(Debug)]
pub struct SkippedDefinition {
    pub id: Uuid,
    pub reason: FinanceError,
}

#[derive(Debug, Default)]
pub struct DecodedDefinitions {
    pub definitions: Vec<TransactionDefinition>,
    pub skipped: Vec<SkippedDefinition>,
}

/// Decodes repository rows into typed definitions. Invalid rows are excluded
/// from the result, logged, and reported in `skipped`.
pub fn decode_definitions(records: Vec<DefinitionRecord>) -> DecodedDefinitions {
    let mut decoded = DecodedDefinitions::default();
    for record in records {
        let id = record.id;
        match record.into_definition() {
            Ok(definition) => decoded.definitions.push(definition),
            Err(reason) => {
                tracing::warn!(%id, error = %reason, "skipping transaction definition");
                decoded.skipped.push(SkippedDefinition { id, reason });
            }
        }
    }
    decoded
}
