//! Equity arithmetic.
//!
//! Turns a priced labor line into an equity entry and totals recorded
//! equity logs.

use rust_decimal::Decimal;

use crate::models::{EquityEntry, EquityLog, LaborLineItem};

use super::rounding::{mul_or_zero, round_currency, sum_or_zero};

/// Shares earned for working `hours` at `actual_rate` instead of `goal_rate`.
///
/// Never negative. Used for equity logged outside a recalculation; a priced
/// labor line already carries its shares.
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::shares_earned;
/// use rust_decimal::Decimal;
///
/// let shares = shares_earned(Decimal::new(117, 0), Decimal::new(100, 0), Decimal::new(360, 0));
/// assert_eq!(shares, Decimal::new(6120, 0));
/// ```
pub fn shares_earned(goal_rate: Decimal, actual_rate: Decimal, hours: Decimal) -> Decimal {
    let shortfall = goal_rate.checked_sub(actual_rate).unwrap_or(Decimal::ZERO);
    round_currency(mul_or_zero(shortfall, hours).max(Decimal::ZERO))
}

/// Builds the equity entry for a priced labor line.
///
/// The shares are the line's `producerial_shares`, which were priced from
/// the unrounded rate, so the entry matches the line to the cent.
pub fn equity_entry_for_line(
    line: &LaborLineItem,
    project_id: &str,
    goal_rate: Decimal,
) -> EquityEntry {
    EquityEntry {
        collaborator_id: line.collaborator_id.clone(),
        project_id: project_id.to_string(),
        scenario_id: line.scenario_id.clone(),
        goal_rate,
        actual_rate: line.rate,
        hours_worked: line.hours,
        shares_earned: line.producerial_shares,
    }
}

/// Total shares across a set of equity logs.
pub fn collaborator_equity<'a>(logs: impl IntoIterator<Item = &'a EquityLog>) -> Decimal {
    sum_or_zero(logs.into_iter().map(|log| log.entry.shares_earned))
}
