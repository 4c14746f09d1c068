// Handler for POST /calculate/parking
use axum::Json;
use shared::models::{ParkingQuote, ParkingRequest};
use shared::utils::format_price;

use super::extract::ApiJson;
use crate::error::EngineError;
use crate::pricing::calculate_parking_price;

pub async fn handle_calculate_parking(
    ApiJson(req_payload): ApiJson<ParkingRequest>,
) -> Result<Json<ParkingQuote>, EngineError> {
    tracing::info!(
        parking_type = %req_payload.parking_type,
        with_discount = req_payload.with_discount,
        "Received parking price request"
    );

    let quote = calculate_parking_price(&req_payload)?;

    tracing::debug!(price = %format_price(quote.price), "Parking price calculated");
    Ok(Json(quote))
}
