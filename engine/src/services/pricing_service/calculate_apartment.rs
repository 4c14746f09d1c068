// Handler for POST /calculate/apartment
use axum::Json;
use shared::models::{ApartmentQuote, ApartmentRequest};
use shared::utils::{coeff_class, format_percent, format_price};

use super::extract::ApiJson;
use crate::error::EngineError;
use crate::pricing::calculator::validate_apartment_request;
use crate::pricing::calculate_apartment_price;

pub async fn handle_calculate_apartment(
    ApiJson(req_payload): ApiJson<ApartmentRequest>,
) -> Result<Json<ApartmentQuote>, EngineError> {
    tracing::info!(
        apartment_type = %req_payload.apartment_type,
        building = %req_payload.building,
        floor = req_payload.floor,
        area_total = req_payload.area_total,
        "Received apartment price request"
    );

    validate_apartment_request(&req_payload)?;
    let quote = calculate_apartment_price(&req_payload)?;

    tracing::info!(
        total_coeff = %format_percent(quote.coefficients.total),
        coeff_class = coeff_class(quote.coefficients.total),
        final_budget = %format_price(quote.pricing.final_budget),
        site_budget = %format_price(quote.site.budget),
        "Apartment price calculated"
    );
    Ok(Json(quote))
}
