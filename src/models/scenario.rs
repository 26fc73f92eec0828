//! Scenario and line item models.
//!
//! A [`Scenario`] is one pay policy applied to a project. Each scenario owns
//! a set of [`LineItem`]s describing labor and expense costs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named funding policy for a project.
///
/// # Example
///
/// ```
/// use budget_engine::models::Scenario;
/// use rust_decimal::Decimal;
///
/// let scenario = Scenario {
///     id: "scenario-3".to_string(),
///     project_id: "project-1".to_string(),
///     name: "Bare Bones".to_string(),
///     description: None,
///     wage_floor: Decimal::new(80, 0),
///     percentage_of_goal: Decimal::new(50, 0),
/// };
/// assert_eq!(scenario.wage_floor, Decimal::new(80, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: String,
    /// The project this scenario budgets.
    pub project_id: String,
    /// Scenario name (e.g., "Realistic Scenario").
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Minimum hourly rate guaranteed to every collaborator.
    #[serde(default)]
    pub wage_floor: Decimal,
    /// Share of each collaborator's goal rate paid, as a percentage (may exceed 100).
    #[serde(default)]
    pub percentage_of_goal: Decimal,
}

/// A labor cost line: one collaborator working one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLineItem {
    /// Unique identifier for the line item.
    pub id: String,
    /// The scenario that owns this line item.
    pub scenario_id: String,
    /// The collaborator doing the work.
    pub collaborator_id: String,
    /// The phase the work belongs to.
    pub phase_id: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Actual pay under the scenario policy.
    #[serde(default)]
    pub cost: Decimal,
    /// Effective hourly rate under the scenario policy.
    #[serde(default)]
    pub rate: Decimal,
    /// Total hours worked.
    #[serde(default)]
    pub hours: Decimal,
    /// Equity owed: goal pay minus actual pay, never negative.
    #[serde(default)]
    pub producerial_shares: Decimal,
}

/// A non-labor cost line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    /// Unique identifier for the line item.
    pub id: String,
    /// The scenario that owns this line item.
    pub scenario_id: String,
    /// The expense category (e.g., "Travel").
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// The cost of the expense.
    #[serde(default)]
    pub cost: Decimal,
}

/// A budget line, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineItem {
    /// Collaborator pay.
    Labor(LaborLineItem),
    /// Any other cost.
    Expense(ExpenseLineItem),
}

impl LineItem {
    /// Creates an expense line item.
    pub fn expense(
        id: impl Into<String>,
        scenario_id: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        cost: Decimal,
    ) -> Self {
        LineItem::Expense(ExpenseLineItem {
            id: id.into(),
            scenario_id: scenario_id.into(),
            category: category.into(),
            description: description.into(),
            cost,
        })
    }

    /// Returns the line item id.
    pub fn id(&self) -> &str {
        match self {
            LineItem::Labor(item) => &item.id,
            LineItem::Expense(item) => &item.id,
        }
    }

    /// Returns the owning scenario id.
    pub fn scenario_id(&self) -> &str {
        match self {
            LineItem::Labor(item) => &item.scenario_id,
            LineItem::Expense(item) => &item.scenario_id,
        }
    }

    /// Returns the cost of the line.
    pub fn cost(&self) -> Decimal {
        match self {
            LineItem::Labor(item) => item.cost,
            LineItem::Expense(item) => item.cost,
        }
    }

    /// Returns true for labor lines.
    pub fn is_labor(&self) -> bool {
        matches!(self, LineItem::Labor(_))
    }
}
