//! Response types for the budget engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the equity summary body.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::store::EquityLedger;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("Invalid value for '{}': {}", field, message),
                ),
            },
            EngineError::ScenarioNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SCENARIO_NOT_FOUND",
                    format!("Scenario not found: {}", id),
                    "The scenario id is not part of the submitted snapshot",
                ),
            },
            EngineError::ProjectNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PROJECT_NOT_FOUND",
                    format!("Project not found: {}", id),
                    "The scenario refers to a project that is not part of the submitted snapshot",
                ),
            },
        }
    }
}

/// Equity totals for the `/equity/summary` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquitySummary {
    /// Shares earned per collaborator.
    pub by_collaborator: BTreeMap<String, Decimal>,
    /// Shares granted per project.
    pub by_project: BTreeMap<String, Decimal>,
    /// Shares across the whole ledger.
    pub total: Decimal,
}

impl From<&EquityLedger> for EquitySummary {
    fn from(ledger: &EquityLedger) -> Self {
        let mut summary = EquitySummary::default();
        for log in ledger.entries() {
            let entry = &log.entry;
            *summary
                .by_collaborator
                .entry(entry.collaborator_id.clone())
                .or_default() += entry.shares_earned;
            *summary
                .by_project
                .entry(entry.project_id.clone())
                .or_default() += entry.shares_earned;
            summary.total += entry.shares_earned;
        }
        summary
    }
}
