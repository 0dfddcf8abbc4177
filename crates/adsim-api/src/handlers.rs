use adsim_engine::MetricsEngine;
use adsim_report::SimulationReport;
use adsim_types::{InputBounds, InputField, ScenarioInput, ScenarioPair, ScenarioResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub description: String,
}

/// One form field: label, default and accepted range
#[derive(Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub field: InputField,
    pub label: String,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub whole_number: bool,
}

#[derive(Serialize, Deserialize)]
pub struct DefaultsResponse {
    pub scenario: ScenarioInput,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub has_results: bool,
    pub runs_started: u64,
    pub last_run_at: Option<DateTime<Utc>>,
    pub uptime_seconds: u64,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Info endpoint
pub async fn info() -> impl IntoResponse {
    Json(InfoResponse {
        name: "AdSim".to_string(),
        description: "Marketing A/B scenario simulator".to_string(),
    })
}

/// Form defaults and accepted ranges
pub async fn get_defaults() -> impl IntoResponse {
    let scenario = ScenarioInput::default();
    let fields = InputBounds::standard()
        .fields
        .iter()
        .map(|b| FieldDescriptor {
            field: b.field,
            label: b.field.label().to_string(),
            default: scenario.value(b.field),
            min: b.min,
            max: b.max,
            whole_number: b.whole_number,
        })
        .collect();

    Json(DefaultsResponse { scenario, fields })
}

/// Compute a single scenario without touching the session
pub async fn compute_scenario(
    payload: Result<Json<ScenarioInput>, JsonRejection>,
) -> Result<Json<ScenarioResult>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;
    Ok(Json(MetricsEngine::compute(&input)))
}

/// Run both scenarios and hold the result pair
pub async fn run_simulation(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioPair<ScenarioInput>>, JsonRejection>,
) -> Result<Json<SimulationReport>, ApiError> {
    let Json(inputs) = payload?;
    for (scenario, input) in inputs.iter() {
        input
            .validate()
            .map_err(|source| ApiError::InvalidScenario { scenario, source })?;
    }

    let report = {
        let mut slot = state.slot()?;
        let run = slot.run(inputs.scenario_a, inputs.scenario_b, Utc::now());
        SimulationReport::build(run)?
    };

    tracing::debug!(fingerprint = %report.fingerprint, "simulation stored");
    Ok(Json(report))
}

/// Report for the held result pair
pub async fn current_simulation(
    State(state): State<AppState>,
) -> Result<Json<SimulationReport>, ApiError> {
    let slot = state.slot()?;
    let run = slot
        .session()
        .current()
        .ok_or_else(|| ApiError::NotFound("no simulation has been run".to_string()))?;
    Ok(Json(SimulationReport::build(run)?))
}

/// Discard the held result pair
pub async fn reset_simulation(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.slot()?.reset();
    Ok(StatusCode::NO_CONTENT)
}

/// Session status
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let (has_results, runs_started, last_run_at) = {
        let slot = state.slot()?;
        let session = slot.session();
        (session.has_results(), session.runs_started(), slot.last_run_at())
    };
    let uptime = Utc::now().signed_duration_since(state.started_at);

    Ok(Json(StatusResponse {
        status: "healthy".to_string(),
        has_results,
        runs_started,
        last_run_at,
        uptime_seconds: uptime.num_seconds().max(0) as u64,
    }))
}
