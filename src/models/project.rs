//! Project, phase and income source models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A block of work within a project.
///
/// # Example
///
/// ```
/// use budget_engine::models::Phase;
/// use rust_decimal::Decimal;
///
/// let phase = Phase {
///     id: "phase-1".to_string(),
///     name: "Creation".to_string(),
///     workload_hours_per_week: Decimal::new(30, 0),
///     duration_weeks: Decimal::new(12, 0),
///     start_date: None,
/// };
/// assert_eq!(phase.workload_hours_per_week * phase.duration_weeks, Decimal::new(360, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Unique identifier within the project.
    pub id: String,
    /// Phase name (e.g., "Rehearsal").
    pub name: String,
    /// Expected hours of work per week.
    #[serde(default)]
    pub workload_hours_per_week: Decimal,
    /// Length of the phase in weeks.
    #[serde(default)]
    pub duration_weeks: Decimal,
    /// When the phase begins.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// How certain an income source is.
///
/// Statuses other than `confirmed` and `likely` are kept verbatim and count
/// towards neither total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncomeStatus {
    /// Money that is committed.
    Confirmed,
    /// Money that is expected but not committed.
    Likely,
    /// Any other status label.
    Other(String),
}

impl From<String> for IncomeStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "confirmed" => IncomeStatus::Confirmed,
            "likely" => IncomeStatus::Likely,
            _ => IncomeStatus::Other(value),
        }
    }
}

impl From<IncomeStatus> for String {
    fn from(status: IncomeStatus) -> Self {
        match status {
            IncomeStatus::Confirmed => "confirmed".to_string(),
            IncomeStatus::Likely => "likely".to_string(),
            IncomeStatus::Other(label) => label,
        }
    }
}

/// A grant, fee or other revenue line for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    /// Optional identifier assigned by the owning store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Funder or revenue name.
    pub name: String,
    /// Amount expected or received.
    #[serde(default)]
    pub amount: Decimal,
    /// Certainty of the income.
    pub status: IncomeStatus,
    /// When the money arrived, if it has.
    #[serde(default)]
    pub received_date: Option<NaiveDate>,
}

/// A creative project with its phases and income sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the project.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the project.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Work phases, in schedule order.
    #[serde(default)]
    pub phases: Vec<Phase>,
    /// Income sources, in the order they were added.
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
}

impl Project {
    /// Finds a phase by id.
    pub fn phase(&self, phase_id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == phase_id)
    }
}
