//! Financial profile and derived rate models.
//!
//! A [`FinancialProfile`] captures one collaborator's personal finances for a
//! year. [`Rates`] is the derived, never-persisted output of the rate engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recurring personal expense.
///
/// The amount is always a MONTHLY figure; the rate engine annualizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Optional identifier assigned by the owning store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The expense category (e.g., "Rent/Mortgage").
    pub category: String,
    /// The monthly amount.
    #[serde(default)]
    pub monthly_amount: Decimal,
}

/// A collaborator's financial profile for a given year.
///
/// Numeric schedule fields are optional: an absent value takes the engine
/// default, while an explicit value (including zero) is used as given.
///
/// # Example
///
/// ```
/// use budget_engine::models::{Expense, FinancialProfile};
/// use rust_decimal::Decimal;
///
/// let profile = FinancialProfile {
///     expenses: vec![Expense {
///         id: None,
///         category: "Rent/Mortgage".to_string(),
///         monthly_amount: Decimal::new(2400, 0),
///     }],
///     ..FinancialProfile::new("profile-1", "collab-1", 2024)
/// };
/// assert_eq!(profile.target_hours_per_day, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Unique identifier for the profile.
    pub id: String,
    /// The collaborator who owns this profile.
    pub collaborator_id: String,
    /// The calendar year the profile applies to.
    pub year: i32,
    /// Monthly expenses, in the order they were entered.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Hours worked per day.
    #[serde(default)]
    pub target_hours_per_day: Option<Decimal>,
    /// Days worked per week.
    #[serde(default)]
    pub target_days_per_week: Option<Decimal>,
    /// Weeks worked per year.
    #[serde(default)]
    pub target_weeks_per_year: Option<Decimal>,
    /// Share of working time that is not billable, as a 0-100 percentage.
    #[serde(default)]
    pub non_billable_percentage: Option<Decimal>,
    /// What the collaborator currently earns per year, net.
    #[serde(default)]
    pub actual_current_annual_net_income: Option<Decimal>,
    /// The lowest hourly rate the collaborator will accept.
    #[serde(default)]
    pub minimum_acceptable_rate: Option<Decimal>,
}

impl FinancialProfile {
    /// Creates an empty profile with every optional field unset.
    pub fn new(id: impl Into<String>, collaborator_id: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            collaborator_id: collaborator_id.into(),
            year,
            expenses: Vec::new(),
            target_hours_per_day: None,
            target_days_per_week: None,
            target_weeks_per_year: None,
            non_billable_percentage: None,
            actual_current_annual_net_income: None,
            minimum_acceptable_rate: None,
        }
    }
}

/// Target pay rates derived from a [`FinancialProfile`].
///
/// Currency values are rounded to 2 decimal places; `billable_hours` and
/// `goal_annual` are rounded to whole numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rates {
    /// Hourly rate needed to cover expenses plus the tax buffer.
    pub goal_hourly: Decimal,
    /// `goal_hourly` over a working day.
    pub goal_daily: Decimal,
    /// Hourly rate implied by current net income.
    pub now_hourly: Decimal,
    /// `now_hourly` over a working day.
    pub now_daily: Decimal,
    /// The minimum acceptable hourly rate.
    pub minimum_hourly: Decimal,
    /// `minimum_hourly` over a working day.
    pub minimum_daily: Decimal,
    /// Annualized expenses.
    pub annual_expenses: Decimal,
    /// Current net income, echoed back.
    pub actual_current_annual_net_income: Decimal,
    /// Annual gross income goal including the tax buffer.
    pub goal_annual: Decimal,
    /// Scheduled hours per year before the non-billable share is removed.
    pub total_work_hours: Decimal,
    /// Billable hours per year.
    pub billable_hours: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_profile_with_absent_fields() {
        let json = r#"{
            "id": "profile-1",
            "collaborator_id": "collab-1",
            "year": 2024
        }"#;

        let profile: FinancialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.collaborator_id, "collab-1");
        assert!(profile.expenses.is_empty());
        assert_eq!(profile.target_hours_per_day, None);
        assert_eq!(profile.non_billable_percentage, None);
        assert_eq!(profile.minimum_acceptable_rate, None);
    }

    #[test]
    fn test_deserialize_profile_keeps_explicit_zero() {
        let json = r#"{
            "id": "profile-1",
            "collaborator_id": "collab-1",
            "year": 2024,
            "target_weeks_per_year": "0",
            "expenses": [{ "category": "Rent/Mortgage", "monthly_amount": "2400" }]
        }"#;

        let profile: FinancialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.target_weeks_per_year, Some(Decimal::ZERO));
        assert_eq!(profile.expenses[0].monthly_amount, dec("2400"));
    }

    #[test]
    fn test_expense_without_amount_defaults_to_zero() {
        let expense: Expense = serde_json::from_str(r#"{ "category": "Misc" }"#).unwrap();
        assert_eq!(expense.monthly_amount, Decimal::ZERO);
    }
}
