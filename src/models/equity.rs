//! Equity ledger models.
//!
//! An [`EquityEntry`] holds the computed values of one equity event. Once it
//! is recorded it becomes an [`EquityLog`], an immutable ledger row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The values of an equity event before it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityEntry {
    /// The collaborator who earned the shares.
    pub collaborator_id: String,
    /// The project the work was done on.
    pub project_id: String,
    /// The scenario whose policy produced the shortfall.
    pub scenario_id: String,
    /// The collaborator's goal hourly rate.
    pub goal_rate: Decimal,
    /// The hourly rate actually paid.
    pub actual_rate: Decimal,
    /// Hours worked.
    pub hours_worked: Decimal,
    /// `(goal_rate - actual_rate) * hours_worked`, never negative.
    pub shares_earned: Decimal,
}

/// A recorded equity event.
///
/// # Example
///
/// ```
/// use budget_engine::models::{EquityEntry, EquityLog};
/// use rust_decimal::Decimal;
///
/// let log = EquityLog::record(EquityEntry {
///     collaborator_id: "collab-1".to_string(),
///     project_id: "project-1".to_string(),
///     scenario_id: "scenario-2".to_string(),
///     goal_rate: Decimal::new(117, 0),
///     actual_rate: Decimal::new(100, 0),
///     hours_worked: Decimal::new(360, 0),
///     shares_earned: Decimal::new(6120, 0),
/// });
/// assert_eq!(log.entry.shares_earned, Decimal::new(6120, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityLog {
    /// Unique identifier for the log row.
    pub id: String,
    /// The recorded values.
    #[serde(flatten)]
    pub entry: EquityEntry,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
}

impl EquityLog {
    /// Stamps an entry with a fresh id and the current time.
    pub fn record(entry: EquityEntry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            entry,
            created_at: Utc::now(),
        }
    }
}
