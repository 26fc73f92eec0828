//! Labor cost calculation.
//!
//! Applies a scenario's pay policy (percentage of goal, wage floor) to a
//! collaborator's goal rate and a phase's workload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Phase, Scenario};

use super::rounding::{mul_or_zero, round_currency};

/// Inputs to [`compute_labor_cost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborCostInput {
    /// The collaborator's goal hourly rate.
    pub personal_goal_rate: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Number of weeks worked.
    pub duration_weeks: Decimal,
    /// Minimum hourly rate guaranteed by the scenario.
    pub wage_floor: Decimal,
    /// Share of the goal rate paid, as a percentage.
    pub percentage_of_goal: Decimal,
}

impl LaborCostInput {
    /// Builds the input for one collaborator working one phase under a scenario.
    pub fn for_phase(personal_goal_rate: Decimal, phase: &Phase, scenario: &Scenario) -> Self {
        Self {
            personal_goal_rate,
            hours_per_week: phase.workload_hours_per_week,
            duration_weeks: phase.duration_weeks,
            wage_floor: scenario.wage_floor,
            percentage_of_goal: scenario.percentage_of_goal,
        }
    }
}

/// The result of a labor cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborCostResult {
    /// Goal rate scaled by the percentage, before the floor (unrounded).
    pub raw_rate: Decimal,
    /// The hourly rate paid, rounded to cents.
    pub calculated_rate: Decimal,
    /// The hourly rate paid after the floor, rounded to cents.
    pub effective_rate: Decimal,
    /// `hours_per_week * duration_weeks` (unrounded).
    pub total_hours: Decimal,
    /// Pay under the scenario policy, rounded to cents.
    pub actual_pay: Decimal,
    /// Pay at the full goal rate (unrounded).
    pub goal_pay: Decimal,
    /// Goal pay minus actual pay, clamped at zero and rounded to cents.
    pub producerial_shares: Decimal,
}

/// Computes the pay and equity for a block of work under a scenario policy.
///
/// The goal rate is scaled by `percentage_of_goal` and then raised to the
/// wage floor if it falls below it. The equity delta ("producerial shares")
/// is what the collaborator would have earned at their goal rate minus what
/// they are paid; it never goes negative, even when the floor pushes pay
/// above goal.
///
/// # Arguments
///
/// * `input` - Goal rate, workload and scenario policy
///
/// # Returns
///
/// A [`LaborCostResult`]; `effective_rate`, `actual_pay` and
/// `producerial_shares` are rounded to cents, `total_hours` is not. When the
/// workload or its pay is out of the decimal range, hours, pay and shares
/// are all zero.
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::{compute_labor_cost, LaborCostInput};
/// use rust_decimal::Decimal;
///
/// let result = compute_labor_cost(&LaborCostInput {
///     personal_goal_rate: Decimal::new(100, 0),
///     hours_per_week: Decimal::new(30, 0),
///     duration_weeks: Decimal::new(12, 0),
///     wage_floor: Decimal::new(80, 0),
///     percentage_of_goal: Decimal::new(65, 0),
/// });
///
/// assert_eq!(result.effective_rate, Decimal::new(80, 0));
/// assert_eq!(result.actual_pay, Decimal::new(28800, 0));
/// assert_eq!(result.producerial_shares, Decimal::new(7200, 0));
/// ```
pub fn compute_labor_cost(input: &LaborCostInput) -> LaborCostResult {
    let raw_rate = mul_or_zero(
        input.personal_goal_rate,
        input.percentage_of_goal / Decimal::ONE_HUNDRED,
    );
    let effective_rate = raw_rate.max(input.wage_floor);

    let (total_hours, actual_pay, goal_pay) = workload_pay(input, effective_rate)
        .unwrap_or((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
    let producerial_shares = goal_pay
        .checked_sub(actual_pay)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);

    let rounded_rate = round_currency(effective_rate);

    LaborCostResult {
        raw_rate,
        calculated_rate: rounded_rate,
        effective_rate: rounded_rate,
        total_hours,
        actual_pay: round_currency(actual_pay),
        goal_pay,
        producerial_shares: round_currency(producerial_shares),
    }
}

/// Total hours, actual pay and goal pay, or `None` if any is out of range.
fn workload_pay(
    input: &LaborCostInput,
    effective_rate: Decimal,
) -> Option<(Decimal, Decimal, Decimal)> {
    let total_hours = input.hours_per_week.checked_mul(input.duration_weeks)?;
    let actual_pay = effective_rate.checked_mul(total_hours)?;
    let goal_pay = input.personal_goal_rate.checked_mul(total_hours)?;
    Some((total_hours, actual_pay, goal_pay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(goal: &str, hpw: &str, weeks: &str, floor: &str, pct: &str) -> LaborCostInput {
        LaborCostInput {
            personal_goal_rate: dec(goal),
            hours_per_week: dec(hpw),
            duration_weeks: dec(weeks),
            wage_floor: dec(floor),
            percentage_of_goal: dec(pct),
        }
    }

    /// LC-001: floor lifts a discounted rate
    #[test]
    fn test_floor_lifts_discounted_rate() {
        let result = compute_labor_cost(&input("100", "30", "12", "80", "65"));

        assert_eq!(result.raw_rate, dec("65"));
        assert_eq!(result.effective_rate, dec("80"));
        assert_eq!(result.calculated_rate, dec("80"));
        assert_eq!(result.total_hours, dec("360"));
        assert_eq!(result.actual_pay, dec("28800"));
        assert_eq!(result.goal_pay, dec("36000"));
        assert_eq!(result.producerial_shares, dec("7200"));
    }

    /// LC-002: floor above goal clamps equity to zero
    #[test]
    fn test_floor_above_goal_clamps_equity_to_zero() {
        let result = compute_labor_cost(&input("50", "30", "12", "80", "50"));

        assert_eq!(result.raw_rate, dec("25"));
        assert_eq!(result.effective_rate, dec("80"));
        assert_eq!(result.actual_pay, dec("28800"));
        assert_eq!(result.goal_pay, dec("18000"));
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    /// LC-003: full goal rate owes no equity
    #[test]
    fn test_full_goal_rate_owes_no_equity() {
        let result = compute_labor_cost(&input("117", "30", "12", "100", "100"));

        assert_eq!(result.effective_rate, dec("117"));
        assert_eq!(result.actual_pay, dec("42120"));
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    /// LC-004: percentage above 100 pays more than goal without negative equity
    #[test]
    fn test_percentage_above_100() {
        let result = compute_labor_cost(&input("60", "10", "4", "0", "125"));

        assert_eq!(result.effective_rate, dec("75"));
        assert_eq!(result.actual_pay, dec("3000"));
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    /// LC-005: rounding applies to rate, pay and shares but not hours
    #[test]
    fn test_rounding_of_fractional_values() {
        let result = compute_labor_cost(&input("65.18", "12.5", "3.5", "20", "65"));

        // 65.18 * 0.65 = 42.367
        assert_eq!(result.raw_rate, dec("42.367"));
        assert_eq!(result.effective_rate, dec("42.37"));
        assert_eq!(result.total_hours, dec("43.75"));
        // 42.367 * 43.75 = 1853.55625
        assert_eq!(result.actual_pay, dec("1853.56"));
        // 65.18 * 43.75 = 2851.625; 2851.625 - 1853.55625 = 998.06875
        assert_eq!(result.producerial_shares, dec("998.07"));
    }

    #[test]
    fn test_zero_hours_costs_nothing() {
        let result = compute_labor_cost(&input("100", "0", "12", "80", "65"));

        assert_eq!(result.total_hours, Decimal::ZERO);
        assert_eq!(result.actual_pay, Decimal::ZERO);
        assert_eq!(result.producerial_shares, Decimal::ZERO);
        assert_eq!(result.effective_rate, dec("80"));
    }

    #[test]
    fn test_zero_goal_rate_pays_floor() {
        let result = compute_labor_cost(&input("0", "30", "12", "25", "65"));

        assert_eq!(result.effective_rate, dec("25"));
        assert_eq!(result.actual_pay, dec("9000"));
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    /// LC-006: pay beyond the decimal range degrades to zero instead of panicking
    #[test]
    fn test_out_of_range_pay_degrades_to_zero() {
        let result = compute_labor_cost(&input(
            "10000000000000000",
            "1000000000000",
            "1000000",
            "25",
            "50",
        ));

        assert_eq!(result.raw_rate, dec("5000000000000000"));
        assert_eq!(result.effective_rate, dec("5000000000000000"));
        assert_eq!(result.total_hours, Decimal::ZERO);
        assert_eq!(result.actual_pay, Decimal::ZERO);
        assert_eq!(result.goal_pay, Decimal::ZERO);
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_goal_rate_pays_floor() {
        let result = compute_labor_cost(&input(
            "70000000000000000000000000000",
            "30",
            "12",
            "25",
            "1000",
        ));

        assert_eq!(result.raw_rate, Decimal::ZERO);
        assert_eq!(result.effective_rate, dec("25"));
        assert_eq!(result.total_hours, Decimal::ZERO);
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    #[test]
    fn test_for_phase_copies_workload_and_policy() {
        let phase = Phase {
            id: "phase-2".to_string(),
            name: "Rehearsal".to_string(),
            workload_hours_per_week: dec("35"),
            duration_weeks: dec("8"),
            start_date: None,
        };
        let scenario = Scenario {
            id: "scenario-2".to_string(),
            project_id: "project-1".to_string(),
            name: "Realistic Scenario".to_string(),
            description: None,
            wage_floor: dec("100"),
            percentage_of_goal: dec("65"),
        };

        let input = LaborCostInput::for_phase(dec("74.08"), &phase, &scenario);

        assert_eq!(input.hours_per_week, dec("35"));
        assert_eq!(input.duration_weeks, dec("8"));
        assert_eq!(input.wage_floor, dec("100"));
        assert_eq!(input.percentage_of_goal, dec("65"));
        assert_eq!(input.personal_goal_rate, dec("74.08"));
    }
}
