//! Scenario recalculation result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, EquityEntry, LineItem};
use crate::calculation::{FundingStatus, ScenarioBudget};

/// The complete result of recalculating a scenario.
///
/// Holds every line item of the scenario after repricing, the budget they
/// add up to, how that budget compares with the project's income, and the
/// audit trace of each pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The scenario that was recalculated.
    pub scenario_id: String,
    /// All of the scenario's line items, labor lines repriced.
    pub line_items: Vec<LineItem>,
    /// Totals over `line_items`.
    pub budget: ScenarioBudget,
    /// Funding position of the owning project against `budget.total`.
    pub funding: FundingStatus,
    /// Equity owed on each repriced labor line with a shortfall. The engine
    /// computes these; recording them in a ledger is the caller's decision.
    pub equity_entries: Vec<EquityEntry>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl Recalculation {
    /// Number of labor line items that were repriced.
    pub fn priced_count(&self) -> usize {
        self.audit_trace
            .steps
            .iter()
            .filter(|s| s.rule_id == "labor_cost")
            .count()
    }

    /// Number of labor line items left untouched.
    pub fn skipped_count(&self) -> usize {
        self.audit_trace.warnings.len()
    }
}
