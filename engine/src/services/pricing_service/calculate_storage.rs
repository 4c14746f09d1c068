// Handler for POST /calculate/storage
use axum::Json;
use shared::models::{StorageQuote, StorageRequest};
use shared::utils::format_price;

use super::extract::ApiJson;
use crate::error::EngineError;
use crate::pricing::calculator::validate_storage_request;
use crate::pricing::calculate_storage_price;

pub async fn handle_calculate_storage(
    ApiJson(req_payload): ApiJson<StorageRequest>,
) -> Result<Json<StorageQuote>, EngineError> {
    tracing::info!(area = req_payload.area, with_discount = req_payload.with_discount, "Received storage price request");

    validate_storage_request(&req_payload)?;
    let quote = calculate_storage_price(&req_payload);

    tracing::debug!(total = %format_price(quote.total), "Storage price calculated");
    Ok(Json(quote))
}
