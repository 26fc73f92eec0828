//! Labor line pricing and whole-scenario recalculation.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    LaborCostInput, LaborCostResult, compute_labor_cost, compute_rates_with,
    compute_scenario_budget, equity_entry_for_line, project_funding,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, LaborLineItem, LineItem, Phase, Rates, Recalculation,
    Scenario,
};
use crate::store::current_profile;

use super::workspace::Workspace;

/// Why a labor line could not be priced.
///
/// A skipped line is left as it was; it never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The scenario's project does not exist.
    #[error("project '{project_id}' not found")]
    ProjectNotFound {
        /// The missing project id.
        project_id: String,
    },
    /// The collaborator has no financial profile.
    #[error("no financial profile for collaborator '{collaborator_id}'")]
    ProfileNotFound {
        /// The collaborator without a profile.
        collaborator_id: String,
    },
    /// The phase is not part of the scenario's project.
    #[error("phase '{phase_id}' not found in project '{project_id}'")]
    PhaseNotFound {
        /// The missing phase id.
        phase_id: String,
        /// The project that was searched.
        project_id: String,
    },
}

impl SkipReason {
    /// Stable warning code for the audit trail.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            SkipReason::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            SkipReason::PhaseNotFound { .. } => "PHASE_NOT_FOUND",
        }
    }
}

/// A labor line priced from a collaborator's current profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLabor {
    /// The profile the rates were derived from.
    pub profile_id: String,
    /// The collaborator's derived rates.
    pub rates: Rates,
    /// The phase whose workload was priced.
    pub phase: Phase,
    /// The scenario policy applied to the goal rate.
    pub labor: LaborCostResult,
}

/// Prices one collaborator's work on one phase under a scenario.
///
/// Runs the full pipeline: current profile, rates, phase workload, labor
/// cost. Returns a [`SkipReason`] when the profile, project or phase is
/// missing.
///
/// # Arguments
///
/// * `workspace` - The stores to read from
/// * `scenario` - The scenario whose policy applies
/// * `collaborator_id` - Who does the work
/// * `phase_id` - Which phase of the scenario's project
pub fn price_labor_line(
    workspace: &Workspace<'_>,
    scenario: &Scenario,
    collaborator_id: &str,
    phase_id: &str,
) -> Result<PricedLabor, SkipReason> {
    let profile = current_profile(workspace.profiles, collaborator_id, workspace.year).ok_or_else(
        || SkipReason::ProfileNotFound {
            collaborator_id: collaborator_id.to_string(),
        },
    )?;
    let rates = compute_rates_with(&profile, workspace.config.rate_defaults());

    let project = workspace
        .projects
        .get(&scenario.project_id)
        .ok_or_else(|| SkipReason::ProjectNotFound {
            project_id: scenario.project_id.clone(),
        })?;
    let phase = project
        .phase(phase_id)
        .cloned()
        .ok_or_else(|| SkipReason::PhaseNotFound {
            phase_id: phase_id.to_string(),
            project_id: project.id.clone(),
        })?;

    let labor = compute_labor_cost(&LaborCostInput::for_phase(
        rates.goal_hourly,
        &phase,
        scenario,
    ));

    Ok(PricedLabor {
        profile_id: profile.id,
        rates,
        phase,
        labor,
    })
}

/// Overwrites a labor line's derived fields with a fresh pricing.
pub fn reprice_line_item(item: &LaborLineItem, priced: &PricedLabor) -> LaborLineItem {
    LaborLineItem {
        cost: priced.labor.actual_pay,
        rate: priced.labor.calculated_rate,
        hours: priced.labor.total_hours,
        producerial_shares: priced.labor.producerial_shares,
        ..item.clone()
    }
}

/// Creates a priced labor line item for a scenario.
///
/// The description defaults to `"{phase name} - Labor"`.
pub fn new_labor_line_item(
    workspace: &Workspace<'_>,
    scenario: &Scenario,
    collaborator_id: &str,
    phase_id: &str,
    description: Option<String>,
) -> Result<LineItem, SkipReason> {
    let priced = price_labor_line(workspace, scenario, collaborator_id, phase_id)?;

    let item = LaborLineItem {
        id: Uuid::new_v4().to_string(),
        scenario_id: scenario.id.clone(),
        collaborator_id: collaborator_id.to_string(),
        phase_id: phase_id.to_string(),
        description: description.unwrap_or_else(|| format!("{} - Labor", priced.phase.name)),
        cost: Decimal::ZERO,
        rate: Decimal::ZERO,
        hours: Decimal::ZERO,
        producerial_shares: Decimal::ZERO,
    };

    Ok(LineItem::Labor(reprice_line_item(&item, &priced)))
}

/// Recalculates every line item of a scenario.
///
/// Labor lines are repriced from scratch; lines that cannot be priced are
/// kept unchanged and reported as warnings. Expense lines pass through. The
/// result also carries the new budget, the project's funding status against
/// it, and the equity entries owed on each shortfall.
///
/// # Errors
///
/// Returns `ScenarioNotFound` if the scenario does not exist and
/// `ProjectNotFound` if its project does not exist.
pub fn recalculate_scenario(
    workspace: &Workspace<'_>,
    scenario_id: &str,
) -> EngineResult<Recalculation> {
    let start_time = Instant::now();

    let scenario = workspace
        .scenarios
        .get(scenario_id)
        .ok_or_else(|| EngineError::ScenarioNotFound {
            id: scenario_id.to_string(),
        })?;
    let project = workspace
        .projects
        .get(&scenario.project_id)
        .ok_or_else(|| EngineError::ProjectNotFound {
            id: scenario.project_id.clone(),
        })?;

    let current_items = workspace
        .line_items
        .query(&|item| item.scenario_id() == scenario_id);

    let mut line_items = Vec::with_capacity(current_items.len());
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut equity_entries = Vec::new();
    let mut step_number: u32 = 1;

    for item in current_items {
        let labor_item = match item {
            LineItem::Labor(labor_item) => labor_item,
            expense => {
                line_items.push(expense);
                continue;
            }
        };

        match price_labor_line(
            workspace,
            &scenario,
            &labor_item.collaborator_id,
            &labor_item.phase_id,
        ) {
            Ok(priced) => {
                let repriced = reprice_line_item(&labor_item, &priced);
                debug!(
                    line_item_id = %repriced.id,
                    rate = %repriced.rate,
                    cost = %repriced.cost,
                    "Repriced labor line"
                );

                steps.push(labor_cost_step(step_number, &repriced, &priced, &scenario));
                step_number += 1;

                if repriced.producerial_shares > Decimal::ZERO {
                    equity_entries.push(equity_entry_for_line(
                        &repriced,
                        &project.id,
                        priced.rates.goal_hourly,
                    ));
                }
                line_items.push(LineItem::Labor(repriced));
            }
            Err(reason) => {
                warn!(
                    scenario_id = %scenario_id,
                    line_item_id = %labor_item.id,
                    reason = %reason,
                    "Skipping labor line"
                );
                warnings.push(AuditWarning {
                    code: reason.code().to_string(),
                    message: format!("Line item '{}' was not repriced: {}", labor_item.id, reason),
                    severity: "medium".to_string(),
                });
                line_items.push(LineItem::Labor(labor_item));
            }
        }
    }

    let budget = compute_scenario_budget(&line_items);
    steps.push(AuditStep {
        step_number,
        rule_id: "scenario_budget".to_string(),
        rule_name: "Scenario Budget".to_string(),
        line_item_id: None,
        input: serde_json::json!({ "line_items": line_items.len() }),
        output: serde_json::json!({
            "labor_costs": budget.labor_costs.normalize().to_string(),
            "expense_costs": budget.expense_costs.normalize().to_string(),
            "total": budget.total.normalize().to_string()
        }),
        reasoning: format!(
            "${} labor + ${} expenses = ${}",
            budget.labor_costs.normalize(),
            budget.expense_costs.normalize(),
            budget.total.normalize()
        ),
    });
    step_number += 1;

    let funding = project_funding(&project, &budget);
    steps.push(AuditStep {
        step_number,
        rule_id: "funding_status".to_string(),
        rule_name: "Funding Status".to_string(),
        line_item_id: None,
        input: serde_json::json!({
            "income_sources": project.income_sources.len(),
            "total_costs": budget.total.normalize().to_string()
        }),
        output: serde_json::json!({
            "confirmed_income": funding.confirmed_income.normalize().to_string(),
            "deficit": funding.deficit.normalize().to_string(),
            "funding_percentage": funding.funding_percentage.normalize().to_string()
        }),
        reasoning: format!(
            "Confirmed ${} covers {}% of ${}; deficit ${}",
            funding.confirmed_income.normalize(),
            funding.funding_percentage.normalize(),
            budget.total.normalize(),
            funding.deficit.normalize()
        ),
    });

    let duration = start_time.elapsed();
    info!(
        scenario_id = %scenario_id,
        steps = steps.len(),
        skipped = warnings.len(),
        total = %budget.total,
        duration_us = duration.as_micros(),
        "Scenario recalculated"
    );

    Ok(Recalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: workspace.config.engine().version.clone(),
        scenario_id: scenario.id.clone(),
        line_items,
        budget,
        funding,
        equity_entries,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    })
}

fn labor_cost_step(
    step_number: u32,
    item: &LaborLineItem,
    priced: &PricedLabor,
    scenario: &Scenario,
) -> AuditStep {
    let goal = priced.rates.goal_hourly;
    AuditStep {
        step_number,
        rule_id: "labor_cost".to_string(),
        rule_name: "Labor Cost".to_string(),
        line_item_id: Some(item.id.clone()),
        input: serde_json::json!({
            "collaborator_id": item.collaborator_id,
            "profile_id": priced.profile_id,
            "phase_id": priced.phase.id,
            "goal_hourly": goal.normalize().to_string(),
            "hours_per_week": priced.phase.workload_hours_per_week.normalize().to_string(),
            "duration_weeks": priced.phase.duration_weeks.normalize().to_string(),
            "wage_floor": scenario.wage_floor.normalize().to_string(),
            "percentage_of_goal": scenario.percentage_of_goal.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": item.rate.normalize().to_string(),
            "hours": item.hours.normalize().to_string(),
            "cost": item.cost.normalize().to_string(),
            "producerial_shares": item.producerial_shares.normalize().to_string(),
            "floor_applied": priced.labor.raw_rate < scenario.wage_floor
        }),
        reasoning: format!(
            "{}% of ${} = ${}, floor ${} -> ${}/h x {}h = ${}",
            scenario.percentage_of_goal.normalize(),
            goal.normalize(),
            priced.labor.raw_rate.normalize(),
            scenario.wage_floor.normalize(),
            item.rate.normalize(),
            item.hours.normalize(),
            item.cost.normalize()
        ),
    }
}
