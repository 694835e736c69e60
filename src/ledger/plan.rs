use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::FinanceError;

/// A savings plan tracked against projected cash flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl Plan {
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        target_date: Option<NaiveDate>,
    ) -> Result<Self, FinanceError> {
        if target_amount <= Decimal::ZERO {
            return Err(FinanceError::InvalidAmount(target_amount.to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            target_date,
        })
    }
}
