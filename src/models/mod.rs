//! Core data models for the budget engine.
//!
//! These are plain records: the engine reads them and returns new derived
//! records, never mutating its inputs.

mod audit;
mod equity;
mod profile;
mod project;
mod recalculation;
mod scenario;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use equity::{EquityEntry, EquityLog};
pub use profile::{Expense, FinancialProfile, Rates};
pub use project::{IncomeSource, IncomeStatus, Phase, Project};
pub use recalculation::Recalculation;
pub use scenario::{ExpenseLineItem, LaborLineItem, LineItem, Scenario};
