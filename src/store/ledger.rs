//! Append-only equity ledger.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::collaborator_equity;
use crate::models::{EquityEntry, EquityLog};

/// An append-only record of equity events.
///
/// Entries can be added and read but never changed or removed.
///
/// # Example
///
/// ```
/// use budget_engine::models::EquityEntry;
/// use budget_engine::store::EquityLedger;
/// use rust_decimal::Decimal;
///
/// let mut ledger = EquityLedger::new();
/// ledger.append(EquityEntry {
///     collaborator_id: "collab-1".to_string(),
///     project_id: "project-1".to_string(),
///     scenario_id: "scenario-2".to_string(),
///     goal_rate: Decimal::new(117, 0),
///     actual_rate: Decimal::new(100, 0),
///     hours_worked: Decimal::new(360, 0),
///     shares_earned: Decimal::new(6120, 0),
/// });
///
/// assert_eq!(ledger.total_for_collaborator("collab-1"), Decimal::new(6120, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EquityLedger {
    logs: Vec<EquityLog>,
}

impl EquityLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from previously recorded logs, keeping their order.
    pub fn from_logs(logs: Vec<EquityLog>) -> Self {
        Self { logs }
    }

    /// Records an entry and returns the stored log.
    pub fn append(&mut self, entry: EquityEntry) -> &EquityLog {
        let log = EquityLog::record(entry);
        debug!(
            log_id = %log.id,
            collaborator_id = %log.entry.collaborator_id,
            shares_earned = %log.entry.shares_earned,
            "Appended equity log"
        );
        self.logs.push(log);
        &self.logs[self.logs.len() - 1]
    }

    /// All logs in the order they were recorded.
    pub fn entries(&self) -> &[EquityLog] {
        &self.logs
    }

    /// Logs for one collaborator.
    pub fn for_collaborator<'a>(
        &'a self,
        collaborator_id: &'a str,
    ) -> impl Iterator<Item = &'a EquityLog> + 'a {
        self.logs
            .iter()
            .filter(move |log| log.entry.collaborator_id == collaborator_id)
    }

    /// Logs for one project.
    pub fn for_project<'a>(&'a self, project_id: &'a str) -> impl Iterator<Item = &'a EquityLog> + 'a {
        self.logs
            .iter()
            .filter(move |log| log.entry.project_id == project_id)
    }

    /// Total shares a collaborator has earned across projects.
    pub fn total_for_collaborator(&self, collaborator_id: &str) -> Decimal {
        collaborator_equity(self.for_collaborator(collaborator_id))
    }

    /// Total shares earned on a project.
    pub fn total_for_project(&self, project_id: &str) -> Decimal {
        collaborator_equity(self.for_project(project_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(collaborator_id: &str, project_id: &str, shares: i64) -> EquityEntry {
        EquityEntry {
            collaborator_id: collaborator_id.to_string(),
            project_id: project_id.to_string(),
            scenario_id: "scenario-2".to_string(),
            goal_rate: Decimal::new(117, 0),
            actual_rate: Decimal::new(100, 0),
            hours_worked: Decimal::new(360, 0),
            shares_earned: Decimal::new(shares, 0),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = EquityLedger::new();
        ledger.append(entry("collab-1", "project-1", 10));
        ledger.append(entry("collab-2", "project-1", 20));

        let logs = ledger.entries();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].entry.collaborator_id, "collab-1");
        assert_eq!(logs[1].entry.collaborator_id, "collab-2");
    }

    #[test]
    fn test_totals_by_collaborator_and_project() {
        let mut ledger = EquityLedger::new();
        ledger.append(entry("collab-1", "project-1", 6120));
        ledger.append(entry("collab-1", "project-2", 500));
        ledger.append(entry("collab-2", "project-1", 300));

        assert_eq!(ledger.total_for_collaborator("collab-1"), Decimal::new(6620, 0));
        assert_eq!(ledger.total_for_project("project-1"), Decimal::new(6420, 0));
        assert_eq!(ledger.total_for_collaborator("collab-9"), Decimal::ZERO);
        assert_eq!(ledger.for_project("project-2").count(), 1);
    }

    #[test]
    fn test_from_logs_keeps_existing_entries() {
        let mut source = EquityLedger::new();
        source.append(entry("collab-1", "project-1", 10));

        let ledger = EquityLedger::from_logs(source.entries().to_vec());
        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.entries()[0].id, source.entries()[0].id);
    }
}
