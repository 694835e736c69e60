//! Ledger domain models and the pure calculation layer built on them.

pub mod balance;
pub mod category;
pub mod definition;
pub mod occurrence;
pub mod plan;
pub mod planner;
pub mod recurring;

pub use balance::{DailyBalancePoint, MonthlyBalanceSummary};
pub use category::{CategoryTotal, PaymentMethodTotal, UNCATEGORIZED};
pub use definition::{
    decode_definitions, DecodedDefinitions, DefinitionRecord, Frequency, SkippedDefinition,
    TransactionDefinition, TransactionKind,
};
pub use occurrence::TransactionOccurrence;
pub use plan::Plan;
pub use planner::RecurringEditPlan;
pub use recurring::MAX_OCCURRENCES_PER_DEFINITION;
