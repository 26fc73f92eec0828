//! Storage-facing helpers.
//!
//! Persistence itself lives outside the engine. This module defines the
//! repository interface the engine reads through, an in-memory
//! implementation, and the store rules that matter to the calculations:
//! which profile is current, cascading scenario deletes, and the
//! append-only equity ledger.

mod ledger;
mod profiles;
mod repository;
mod scenarios;

pub use ledger::EquityLedger;
pub use profiles::{current_profile, current_year};
pub use repository::{InMemoryRepository, Record, Repository};
pub use scenarios::delete_scenario;
