//! HTTP request handlers for the budget engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    LaborCostInput, compute_funding_status, compute_labor_cost, compute_rates_with,
    compute_scenario_budget,
};
use crate::models::FinancialProfile;
use crate::planner::{Workspace, recalculate_scenario};
use crate::store::{EquityLedger, current_year};

use super::request::{
    EquitySummaryRequest, FundingStatusRequest, RecalculationRequest, ScenarioBudgetRequest,
    Snapshot,
};
use super::response::{ApiError, ApiErrorResponse, EquitySummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", post(rates_handler))
        .route("/labor-cost", post(labor_cost_handler))
        .route("/scenario-budget", post(scenario_budget_handler))
        .route("/funding-status", post(funding_status_handler))
        .route("/scenarios/recalculate", post(recalculate_handler))
        .route("/equity/summary", post(equity_summary_handler))
        .with_state(state)
}

/// Handler for POST /rates.
///
/// Derives a collaborator's rates from a financial profile. Absent schedule
/// fields fall back to the configured defaults.
async fn rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<FinancialProfile>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rates request");

    let profile = match parse_payload(payload, correlation_id) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let rates = compute_rates_with(&profile, state.config().rate_defaults());
    info!(
        correlation_id = %correlation_id,
        profile_id = %profile.id,
        goal_hourly = %rates.goal_hourly,
        duration_us = start_time.elapsed().as_micros(),
        "Rates calculated"
    );

    json_response(StatusCode::OK, &rates)
}

/// Handler for POST /labor-cost.
async fn labor_cost_handler(payload: Result<Json<LaborCostInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing labor cost request");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = compute_labor_cost(&input);
    info!(
        correlation_id = %correlation_id,
        effective_rate = %result.effective_rate,
        actual_pay = %result.actual_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Labor cost calculated"
    );

    json_response(StatusCode::OK, &result)
}

/// Handler for POST /scenario-budget.
async fn scenario_budget_handler(
    payload: Result<Json<ScenarioBudgetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario budget request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let budget = compute_scenario_budget(&request.line_items);
    info!(
        correlation_id = %correlation_id,
        line_items = request.line_items.len(),
        total = %budget.total,
        duration_us = start_time.elapsed().as_micros(),
        "Scenario budget calculated"
    );

    json_response(StatusCode::OK, &budget)
}

/// Handler for POST /funding-status.
async fn funding_status_handler(
    payload: Result<Json<FundingStatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing funding status request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let status = compute_funding_status(&request.income_sources, request.total_costs);
    info!(
        correlation_id = %correlation_id,
        deficit = %status.deficit,
        funding_percentage = %status.funding_percentage,
        duration_us = start_time.elapsed().as_micros(),
        "Funding status calculated"
    );

    json_response(StatusCode::OK, &status)
}

/// Handler for POST /scenarios/recalculate.
///
/// Reprices every line item of a scenario against the submitted snapshot.
async fn recalculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recalculation request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let scenario_id = request.scenario_id.clone();
    let year = request.year.unwrap_or_else(current_year);
    let snapshot = Snapshot::from(request);
    let workspace = Workspace {
        profiles: &snapshot.profiles,
        projects: &snapshot.projects,
        scenarios: &snapshot.scenarios,
        line_items: &snapshot.line_items,
        year,
        config: state.config().config(),
    };

    match recalculate_scenario(&workspace, &scenario_id) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                scenario_id = %scenario_id,
                priced = result.priced_count(),
                skipped = result.skipped_count(),
                total = %result.budget.total,
                duration_us = result.audit_trace.duration_us,
                "Recalculation completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Recalculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /equity/summary.
async fn equity_summary_handler(
    payload: Result<Json<EquitySummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing equity summary request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let ledger = EquityLedger::from_logs(request.logs);
    let summary = EquitySummary::from(&ledger);
    info!(
        correlation_id = %correlation_id,
        entries = ledger.entries().len(),
        total = %summary.total,
        "Equity summary calculated"
    );

    json_response(StatusCode::OK, &summary)
}

/// Unwraps a JSON body or builds the 400 response for a rejection.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field path.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }))
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{FundingStatus, LaborCostResult, ScenarioBudget};
    use crate::config::ConfigLoader;
    use crate::models::{Rates, Recalculation};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    /// API-001: rates endpoint applies configured defaults
    #[tokio::test]
    async fn test_api_001_rates_returns_200() {
        let body = r#"{
            "id": "profile-1",
            "collaborator_id": "collab-1",
            "year": 2024,
            "expenses": [{ "category": "Rent/Mortgage", "monthly_amount": "5450" }]
        }"#;

        let (status, body) = post_json("/rates", body).await;

        assert_eq!(status, StatusCode::OK);
        let rates: Rates = serde_json::from_slice(&body).unwrap();
        assert_eq!(rates.goal_hourly, dec("65.18"));
        assert_eq!(rates.billable_hours, dec("1204"));
    }

    /// API-002: malformed JSON is rejected with 400
    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, body) = post_json("/labor-cost", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    /// API-003: missing required field is a validation error
    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let (status, body) = post_json("/funding-status", r#"{ "income_sources": [] }"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("total_costs"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/scenario-budget")
                    .body(Body::from(r#"{ "line_items": [] }"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_labor_cost_returns_result() {
        let body = r#"{
            "personal_goal_rate": "100",
            "hours_per_week": "30",
            "duration_weeks": "12",
            "wage_floor": "80",
            "percentage_of_goal": "65"
        }"#;

        let (status, body) = post_json("/labor-cost", body).await;

        assert_eq!(status, StatusCode::OK);
        let result: LaborCostResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.effective_rate, dec("80"));
        assert_eq!(result.actual_pay, dec("28800"));
        assert_eq!(result.producerial_shares, dec("7200"));
    }

    #[tokio::test]
    async fn test_labor_cost_out_of_range_returns_zero_pay() {
        let body = r#"{
            "personal_goal_rate": "10000000000000000",
            "hours_per_week": "1000000000000",
            "duration_weeks": "1000000",
            "wage_floor": "25",
            "percentage_of_goal": "50"
        }"#;

        let (status, body) = post_json("/labor-cost", body).await;

        assert_eq!(status, StatusCode::OK);
        let result: LaborCostResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.actual_pay, Decimal::ZERO);
        assert_eq!(result.producerial_shares, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_rates_out_of_range_schedule_returns_zero_rates() {
        let body = r#"{
            "id": "profile-1",
            "collaborator_id": "collab-1",
            "year": 2024,
            "target_hours_per_day": "100000000000000000000",
            "target_weeks_per_year": "100000000000000",
            "expenses": [{ "category": "Rent/Mortgage", "monthly_amount": "5450" }]
        }"#;

        let (status, body) = post_json("/rates", body).await;

        assert_eq!(status, StatusCode::OK);
        let rates: Rates = serde_json::from_slice(&body).unwrap();
        assert_eq!(rates.billable_hours, Decimal::ZERO);
        assert_eq!(rates.goal_hourly, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_scenario_budget_returns_totals() {
        let body = r#"{
            "line_items": [
                { "type": "labor", "id": "l1", "scenario_id": "s", "collaborator_id": "c",
                  "phase_id": "p", "cost": "1000.50" },
                { "type": "expense", "id": "e1", "scenario_id": "s", "category": "Venue",
                  "cost": "200.25" }
            ]
        }"#;

        let (status, body) = post_json("/scenario-budget", body).await;

        assert_eq!(status, StatusCode::OK);
        let budget: ScenarioBudget = serde_json::from_slice(&body).unwrap();
        assert_eq!(budget.labor_costs, dec("1000.50"));
        assert_eq!(budget.expense_costs, dec("200.25"));
        assert_eq!(budget.total, dec("1200.75"));
    }

    #[tokio::test]
    async fn test_funding_status_ignores_unknown_status() {
        let body = r#"{
            "income_sources": [
                { "name": "Grant", "amount": "600", "status": "confirmed" },
                { "name": "Maybe", "amount": "300", "status": "pending" }
            ],
            "total_costs": "1000"
        }"#;

        let (status, body) = post_json("/funding-status", body).await;

        assert_eq!(status, StatusCode::OK);
        let funding: FundingStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(funding.confirmed_income, dec("600"));
        assert_eq!(funding.total_income, dec("600"));
        assert_eq!(funding.deficit, dec("400"));
        assert_eq!(funding.funding_percentage, dec("60"));
    }

    #[tokio::test]
    async fn test_recalculate_unknown_scenario_returns_404() {
        let (status, body) =
            post_json("/scenarios/recalculate", r#"{ "scenario_id": "nope" }"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "SCENARIO_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_recalculate_minimal_snapshot() {
        let body = r#"{
            "scenario_id": "scenario-1",
            "year": 2024,
            "profiles": [{
                "id": "profile-1", "collaborator_id": "collab-1", "year": 2024,
                "expenses": [{ "category": "Rent/Mortgage", "monthly_amount": "5450" }]
            }],
            "projects": [{
                "id": "project-1", "name": "Echoes",
                "phases": [{ "id": "phase-1", "name": "Creation",
                             "workload_hours_per_week": "30", "duration_weeks": "12" }]
            }],
            "scenarios": [{
                "id": "scenario-1", "project_id": "project-1", "name": "Ideal",
                "wage_floor": "25", "percentage_of_goal": "100"
            }],
            "line_items": [{
                "type": "labor", "id": "line-1", "scenario_id": "scenario-1",
                "collaborator_id": "collab-1", "phase_id": "phase-1"
            }]
        }"#;

        let (status, body) = post_json("/scenarios/recalculate", body).await;

        assert_eq!(status, StatusCode::OK);
        let result: Recalculation = serde_json::from_slice(&body).unwrap();
        // 65.18 * 360 = 23464.80
        assert_eq!(result.budget.total, dec("23464.80"));
        assert_eq!(result.funding.deficit, dec("23464.80"));
        assert!(result.equity_entries.is_empty());
    }

    #[tokio::test]
    async fn test_equity_summary_of_empty_ledger() {
        let (status, body) = post_json("/equity/summary", r#"{ "logs": [] }"#).await;

        assert_eq!(status, StatusCode::OK);
        let summary: EquitySummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.total, Decimal::ZERO);
        assert!(summary.by_collaborator.is_empty());
    }
}
