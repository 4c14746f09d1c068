// Handler for GET /options
use axum::Json;

use crate::pricing::{options, CalculatorOptions};

pub async fn handle_get_options() -> Json<CalculatorOptions> {
    tracing::debug!("Handling options request");
    Json(options())
}
