//! Personal rate calculation.
//!
//! Converts a collaborator's financial profile into goal, current and minimum
//! hourly/daily rates spread over their billable hours.

use rust_decimal::Decimal;

use crate::config::RateDefaults;
use crate::models::{Expense, FinancialProfile, Rates};

use super::rounding::{mul_or_zero, round_currency, round_whole};

/// Returns the tax buffer added on top of annual expenses (20%).
pub fn tax_rate_buffer() -> Decimal {
    Decimal::new(20, 2)
}

/// Annualizes a list of monthly expenses.
///
/// A total beyond the decimal range is zero.
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::annual_expenses;
/// use budget_engine::models::Expense;
/// use rust_decimal::Decimal;
///
/// let expenses = vec![Expense {
///     id: None,
///     category: "Utilities".to_string(),
///     monthly_amount: Decimal::new(200, 0),
/// }];
/// assert_eq!(annual_expenses(&expenses), Decimal::new(2400, 0));
/// ```
pub fn annual_expenses(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .map(|e| e.monthly_amount.checked_mul(Decimal::from(12)))
        .try_fold(Decimal::ZERO, |total, annual| total.checked_add(annual?))
        .unwrap_or(Decimal::ZERO)
}

/// Computes target rates for a profile using the built-in defaults.
///
/// See [`compute_rates_with`].
pub fn compute_rates(profile: &FinancialProfile) -> Rates {
    compute_rates_with(profile, &RateDefaults::default())
}

/// Computes target rates for a profile.
///
/// Absent schedule fields are taken from `defaults`. The goal rate is annual
/// expenses plus the tax buffer divided by billable hours; the now rate is
/// current net income over the same hours. When there are no billable hours
/// both rates are zero. Daily figures multiply the rounded hourly figure by
/// hours per day. A schedule or expense total beyond the decimal range
/// counts as zero.
///
/// # Arguments
///
/// * `profile` - The collaborator's financial profile
/// * `defaults` - Values substituted for absent profile fields
///
/// # Returns
///
/// The derived [`Rates`], with currency rounded to cents and
/// `billable_hours`/`goal_annual` rounded to whole numbers.
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::compute_rates_with;
/// use budget_engine::config::RateDefaults;
/// use budget_engine::models::{Expense, FinancialProfile};
/// use rust_decimal::Decimal;
///
/// let mut profile = FinancialProfile::new("profile-1", "collab-1", 2024);
/// profile.expenses.push(Expense {
///     id: None,
///     category: "Rent/Mortgage".to_string(),
///     monthly_amount: Decimal::new(5450, 0),
/// });
///
/// let rates = compute_rates_with(&profile, &RateDefaults::default());
/// assert_eq!(rates.billable_hours, Decimal::new(1204, 0));
/// assert_eq!(rates.goal_hourly, Decimal::new(6518, 2));
/// assert_eq!(rates.goal_daily, Decimal::new(45626, 2));
/// ```
pub fn compute_rates_with(profile: &FinancialProfile, defaults: &RateDefaults) -> Rates {
    let hours_per_day = profile
        .target_hours_per_day
        .unwrap_or(defaults.target_hours_per_day);
    let days_per_week = profile
        .target_days_per_week
        .unwrap_or(defaults.target_days_per_week);
    let weeks_per_year = profile
        .target_weeks_per_year
        .unwrap_or(defaults.target_weeks_per_year);
    let non_billable_fraction = profile
        .non_billable_percentage
        .unwrap_or(defaults.non_billable_percentage)
        / Decimal::ONE_HUNDRED;

    let total_work_hours = mul_or_zero(mul_or_zero(weeks_per_year, days_per_week), hours_per_day);
    let billable_hours = Decimal::ONE
        .checked_sub(non_billable_fraction)
        .map_or(Decimal::ZERO, |share| mul_or_zero(total_work_hours, share));

    let annual_expenses = annual_expenses(&profile.expenses);
    let goal_annual = mul_or_zero(annual_expenses, Decimal::ONE + tax_rate_buffer());

    let net_income = profile
        .actual_current_annual_net_income
        .unwrap_or(Decimal::ZERO);

    let goal_hourly = round_currency(per_billable_hour(goal_annual, billable_hours));
    let now_hourly = round_currency(per_billable_hour(net_income, billable_hours));
    let minimum_hourly = round_currency(
        profile
            .minimum_acceptable_rate
            .unwrap_or(defaults.minimum_acceptable_rate),
    );

    Rates {
        goal_hourly,
        goal_daily: round_currency(mul_or_zero(goal_hourly, hours_per_day)),
        now_hourly,
        now_daily: round_currency(mul_or_zero(now_hourly, hours_per_day)),
        minimum_hourly,
        minimum_daily: round_currency(mul_or_zero(minimum_hourly, hours_per_day)),
        annual_expenses: round_currency(annual_expenses),
        actual_current_annual_net_income: round_currency(net_income),
        goal_annual: round_whole(goal_annual),
        total_work_hours,
        billable_hours: round_whole(billable_hours),
    }
}

/// Spreads an annual amount over billable hours, or zero without any.
fn per_billable_hour(annual: Decimal, billable_hours: Decimal) -> Decimal {
    if billable_hours > Decimal::ZERO {
        annual.checked_div(billable_hours).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}
