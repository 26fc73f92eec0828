//! Line item pricing and scenario recalculation.
//!
//! This module wires the pure calculators to stored records: it resolves a
//! collaborator's current profile, derives their rates, looks up the phase
//! workload and applies the scenario policy. Every pricing runs the whole
//! pipeline from the profile; derived line item fields are overwritten, never
//! patched.

mod recalculate;
mod workspace;

pub use recalculate::{
    PricedLabor, SkipReason, new_labor_line_item, price_labor_line, recalculate_scenario,
    reprice_line_item,
};
pub use workspace::Workspace;
