//! Request types for the budget engine API.
//!
//! `/rates` and `/labor-cost` take the domain types directly; the remaining
//! endpoints wrap their inputs in the structures below.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EquityLog, FinancialProfile, IncomeSource, LineItem, Project, Scenario};
use crate::store::InMemoryRepository;

/// Request body for the `/scenario-budget` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioBudgetRequest {
    /// The scenario's line items.
    pub line_items: Vec<LineItem>,
}

/// Request body for the `/funding-status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingStatusRequest {
    /// The project's income sources.
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    /// The cost total to fund.
    pub total_costs: Decimal,
}

/// Request body for the `/scenarios/recalculate` endpoint.
///
/// Carries a snapshot of every record the recalculation may read. The
/// server keeps no state between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculationRequest {
    /// The scenario to recalculate.
    pub scenario_id: String,
    /// Year used to pick each collaborator's profile; defaults to the
    /// current calendar year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Financial profiles of the collaborators.
    #[serde(default)]
    pub profiles: Vec<FinancialProfile>,
    /// Projects with their phases and income sources.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Scenarios.
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    /// Line items of the scenarios.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// In-memory stores built from a [`RecalculationRequest`].
pub(crate) struct Snapshot {
    pub profiles: InMemoryRepository<FinancialProfile>,
    pub projects: InMemoryRepository<Project>,
    pub scenarios: InMemoryRepository<Scenario>,
    pub line_items: InMemoryRepository<LineItem>,
}

impl From<RecalculationRequest> for Snapshot {
    fn from(req: RecalculationRequest) -> Self {
        Snapshot {
            profiles: req.profiles.into_iter().collect(),
            projects: req.projects.into_iter().collect(),
            scenarios: req.scenarios.into_iter().collect(),
            line_items: req.line_items.into_iter().collect(),
        }
    }
}

/// Request body for the `/equity/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquitySummaryRequest {
    /// Equity ledger entries to total.
    #[serde(default)]
    pub logs: Vec<EquityLog>,
}
