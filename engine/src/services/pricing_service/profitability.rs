// Handlers for the lot picker and the profitability report
use axum::extract::State;
use axum::Json;
use shared::models::{LotOptions, ProfitabilityReport, ProfitabilityRequest};
use shared::utils::{format_percent, format_price};

use super::extract::ApiJson;
use super::AppState;
use crate::error::EngineError;
use crate::profitability::calculate_profitability;

pub async fn handle_get_lot_options(State(state): State<AppState>) -> Json<LotOptions> {
    let options = state.lots.options();
    tracing::debug!(buildings = options.buildings.len(), "Handling lot options request");
    Json(options)
}

pub async fn handle_calculate_profitability(
    State(state): State<AppState>,
    ApiJson(req_payload): ApiJson<ProfitabilityRequest>,
) -> Result<Json<ProfitabilityReport>, EngineError> {
    tracing::info!(
        building = %req_payload.building,
        number = req_payload.number,
        installment = req_payload.installment,
        "Received profitability request"
    );

    let report = calculate_profitability(
        &state.lots,
        &req_payload.building,
        req_payload.number,
        req_payload.installment,
    )?;

    tracing::info!(
        lot = %report.lot.code,
        purchase_price = %format_price(report.payment.purchase_price),
        avg_annual_total_yield = %format_percent(report.summary.avg_annual_total_yield),
        payback_total_years = ?report.summary.payback_total_years,
        "Profitability calculated"
    );
    Ok(Json(report))
}
