//! HTTP API module for the budget engine.
//!
//! This module exposes the calculators and scenario recalculation as JSON
//! endpoints. The server is stateless: callers send the records a request
//! needs and get the derived values back.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EquitySummaryRequest, FundingStatusRequest, RecalculationRequest, ScenarioBudgetRequest,
};
pub use response::{ApiError, EquitySummary};
pub use state::AppState;
