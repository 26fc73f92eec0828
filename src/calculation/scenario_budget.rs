//! Scenario budget aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LineItem;

use super::rounding::{round_currency, sum_or_zero};

/// Totals over a scenario's line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioBudget {
    /// Sum of labor line costs.
    pub labor_costs: Decimal,
    /// Sum of expense line costs.
    pub expense_costs: Decimal,
    /// `labor_costs + expense_costs`.
    pub total: Decimal,
}

/// Sums labor and expense costs for a set of line items.
///
/// Each aggregate is summed in full and rounded to cents once at the end.
/// An aggregate beyond the decimal range is zero.
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::compute_scenario_budget;
/// use budget_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![LineItem::expense("line-4", "scenario-1", "Travel", "", Decimal::new(25000, 0))];
/// let budget = compute_scenario_budget(&items);
/// assert_eq!(budget.expense_costs, Decimal::new(25000, 0));
/// assert_eq!(budget.labor_costs, Decimal::ZERO);
/// ```
pub fn compute_scenario_budget(line_items: &[LineItem]) -> ScenarioBudget {
    let labor_costs = sum_or_zero(line_items.iter().filter(|i| i.is_labor()).map(LineItem::cost));
    let expense_costs =
        sum_or_zero(line_items.iter().filter(|i| !i.is_labor()).map(LineItem::cost));
    let total = labor_costs.checked_add(expense_costs).unwrap_or(Decimal::ZERO);

    ScenarioBudget {
        labor_costs: round_currency(labor_costs),
        expense_costs: round_currency(expense_costs),
        total: round_currency(total),
    }
}
