//! Calculation logic for the budget engine.
//!
//! This module contains the pure calculators: personal rates from a
//! financial profile, labor cost under a scenario policy, scenario budget
//! totals, project funding status, and equity arithmetic. None of them
//! performs I/O or fails; missing or zero inputs degrade to zero results.

mod equity;
mod funding_status;
mod labor_cost;
mod personal_rates;
mod rounding;
mod scenario_budget;

pub use equity::{collaborator_equity, equity_entry_for_line, shares_earned};
pub use funding_status::{FundingStatus, compute_funding_status, project_funding};
pub use labor_cost::{LaborCostInput, LaborCostResult, compute_labor_cost};
pub use personal_rates::{annual_expenses, compute_rates, compute_rates_with, tax_rate_buffer};
pub use rounding::{round_currency, round_whole};
pub use scenario_budget::{ScenarioBudget, compute_scenario_budget};
