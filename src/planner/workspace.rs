//! Read-only view over the stores used for a recalculation.

use crate::config::EngineConfig;
use crate::models::{FinancialProfile, LineItem, Project, Scenario};
use crate::store::Repository;

/// The snapshot a recalculation reads from.
///
/// Callers must hand in repositories that present a consistent view for the
/// duration of the call; the planner reads each record once and never
/// writes back.
#[derive(Clone, Copy)]
pub struct Workspace<'a> {
    /// Financial profiles of every collaborator.
    pub profiles: &'a dyn Repository<FinancialProfile>,
    /// Projects with their phases and income sources.
    pub projects: &'a dyn Repository<Project>,
    /// Scenario policies.
    pub scenarios: &'a dyn Repository<Scenario>,
    /// Line items of every scenario.
    pub line_items: &'a dyn Repository<LineItem>,
    /// The year used to pick each collaborator's current profile.
    pub year: i32,
    /// Engine configuration (rate defaults and version).
    pub config: &'a EngineConfig,
}
