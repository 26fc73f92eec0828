//! Project funding status.
//!
//! Compares a project's income sources with a scenario's total cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{IncomeSource, IncomeStatus, Project};

use super::rounding::{round_currency, round_whole, sum_or_zero};
use super::scenario_budget::ScenarioBudget;

/// Funding position of a project against a cost total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingStatus {
    /// Sum of confirmed income.
    pub confirmed_income: Decimal,
    /// Sum of likely income.
    pub likely_income: Decimal,
    /// `confirmed_income + likely_income`.
    pub total_income: Decimal,
    /// Costs not covered by confirmed income; negative when over-funded.
    pub deficit: Decimal,
    /// Confirmed income as a whole-number percentage of costs.
    pub funding_percentage: Decimal,
}

/// Computes how well income sources cover a cost total.
///
/// Only `confirmed` and `likely` sources count; any other status is ignored.
/// The deficit deliberately leaves likely income out, giving the worst case.
///
/// # Arguments
///
/// * `income_sources` - The project's income sources
/// * `total_costs` - The scenario's total cost
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::compute_funding_status;
/// use rust_decimal::Decimal;
///
/// let status = compute_funding_status(&[], Decimal::new(1000, 0));
/// assert_eq!(status.deficit, Decimal::new(1000, 0));
/// assert_eq!(status.funding_percentage, Decimal::ZERO);
/// ```
pub fn compute_funding_status(income_sources: &[IncomeSource], total_costs: Decimal) -> FundingStatus {
    let confirmed_income = sum_with_status(income_sources, &IncomeStatus::Confirmed);
    let likely_income = sum_with_status(income_sources, &IncomeStatus::Likely);

    let funding_percentage = if total_costs > Decimal::ZERO {
        confirmed_income
            .checked_div(total_costs)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ZERO, round_whole)
    } else {
        Decimal::ZERO
    };

    FundingStatus {
        confirmed_income: round_currency(confirmed_income),
        likely_income: round_currency(likely_income),
        total_income: round_currency(
            confirmed_income
                .checked_add(likely_income)
                .unwrap_or(Decimal::ZERO),
        ),
        deficit: round_currency(
            total_costs
                .checked_sub(confirmed_income)
                .unwrap_or(Decimal::ZERO),
        ),
        funding_percentage,
    }
}

/// Funding status of a project against a scenario budget.
pub fn project_funding(project: &Project, budget: &ScenarioBudget) -> FundingStatus {
    compute_funding_status(&project.income_sources, budget.total)
}

fn sum_with_status(income_sources: &[IncomeSource], status: &IncomeStatus) -> Decimal {
    sum_or_zero(
        income_sources
            .iter()
            .filter(|s| &s.status == status)
            .map(|s| s.amount),
    )
}
