// engine/src/services/pricing_service/mod.rs
// Router and shared state of the pricing API. Each endpoint lives in its own handler module.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::profitability::LotRegistry;

pub mod calculate_apartment;
pub mod calculate_parking;
pub mod calculate_storage;
pub mod extract;
pub mod get_options;
pub mod profitability;

#[derive(Clone)]
pub struct AppState {
    lots: Arc<LotRegistry>,
}

impl AppState {
    pub fn new(lots: LotRegistry) -> Self {
        AppState { lots: Arc::new(lots) }
    }
}

fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/options", get(get_options::handle_get_options))
        .route("/calculate/apartment", post(calculate_apartment::handle_calculate_apartment))
        .route("/calculate/storage", post(calculate_storage::handle_calculate_storage))
        .route("/calculate/parking", post(calculate_parking::handle_calculate_parking))
        .route("/calculate/profitability", post(profitability::handle_calculate_profitability))
        .route("/profitability/lots", get(profitability::handle_get_lot_options))
        .with_state(state)
}

/// Serves the built UI. Without server-side rendering every unknown path gets `index.html`.
fn attach_frontend(router: Router, static_dir: &Path, ssr: bool) -> Router {
    let serve_dir = ServeDir::new(static_dir);
    if ssr {
        router.fallback_service(serve_dir)
    } else {
        router.fallback_service(serve_dir.fallback(ServeFile::new(static_dir.join("index.html"))))
    }
}

pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new().nest(config.api_prefix(), api_router(state));

    match &config.server.static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(static_dir = %dir.display(), "Serving calculator UI");
            router = attach_frontend(router, dir, config.frontend.ssr);
        }
        Some(dir) => {
            tracing::info!(static_dir = %dir.display(), "UI build not found, serving the API only");
        }
        None => {}
    }

    router
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profitability::lots::tests::sample_lot;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        let config = AppConfig::load_default().unwrap();
        let state = AppState::new(LotRegistry::new(vec![sample_lot("С1", 101), sample_lot("С2", 7)]));
        create_router(state, &config)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    fn apartment_payload() -> Value {
        json!({
            "apartment_type": "1К",
            "floor": 5,
            "area_total": 42.5,
            "area_summer": 3.0,
            "size": "S",
            "layout": "Линейная",
            "geometry": "Правильная",
            "elevator_zone": "Зона 2",
            "view": "Море",
            "position": "Стандарт",
            "units_on_floor": 26,
            "building": "С1"
        })
    }

    #[tokio::test]
    async fn test_get_options() {
        let request = Request::builder().uri("/api/options").body(Body::empty()).unwrap();
        let (status, body) = send(create_test_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["apartment_types"], json!(["Ст", "1К", "2К"]));
        assert_eq!(body["floors"].as_array().unwrap().len(), 12);
        assert_eq!(body["size_ranges"]["1К"]["M"], "45-50");
    }

    #[tokio::test]
    async fn test_calculate_apartment() {
        let (status, body) = send(create_test_router(), post_json("/api/calculate/apartment", apartment_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["input"]["price_adjustment"], 0.0);
        assert_eq!(body["coefficients"]["base_price"], 313_920.0);
        assert!((body["site"]["price_per_sqm"].as_f64().unwrap() - 401_382.24).abs() < 1e-6);
        assert_eq!(body["crm"]["max_discount"], 0.1);
    }

    #[tokio::test]
    async fn test_calculate_apartment_rejects_out_of_range_floor() {
        let mut payload = apartment_payload();
        payload["floor"] = json!(13);
        let (status, body) = send(create_test_router(), post_json("/api/calculate/apartment", payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("floor"));
    }

    #[tokio::test]
    async fn test_calculate_apartment_unknown_type() {
        let mut payload = apartment_payload();
        payload["apartment_type"] = json!("3К");
        let (status, body) = send(create_test_router(), post_json("/api/calculate/apartment", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Unknown apartment type: 3К");
    }

    #[tokio::test]
    async fn test_calculate_storage() {
        let payload = json!({ "area": 4.0, "with_discount": true });
        let (status, body) = send(create_test_router(), post_json("/api/calculate/storage", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price_per_sqm"], 237_500.0);
        assert_eq!(body["total"], 950_000.0);

        let payload = json!({ "area": -1.0 });
        let (status, _) = send(create_test_router(), post_json("/api/calculate/storage", payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_field_returns_detail() {
        let payload = json!({ "with_discount": true });
        let response = create_test_router()
            .oneshot(post_json("/api/calculate/storage", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()["content-type"], "application/json");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].as_str().unwrap().contains("missing field `area`"));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_detail() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/calculate/profitability")
            .header("content-type", "application/json")
            .body(Body::from("{\"building\": "))
            .unwrap();
        let (status, body) = send(create_test_router(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());

        let payload = json!({ "parking_type": 5 });
        let (status, body) = send(create_test_router(), post_json("/api/calculate/parking", payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("invalid type"));
    }

    #[tokio::test]
    async fn test_calculate_parking() {
        let payload = json!({ "parking_type": "Место для электромобилей" });
        let (status, body) = send(create_test_router(), post_json("/api/calculate/parking", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], 2_000_000.0);
        assert_eq!(body["discount"], 0.0);

        let payload = json!({ "parking_type": "Мотоместо" });
        let (status, body) = send(create_test_router(), post_json("/api/calculate/parking", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Unknown parking type: Мотоместо");
    }

    #[tokio::test]
    async fn test_lot_options() {
        let request = Request::builder().uri("/api/profitability/lots").body(Body::empty()).unwrap();
        let (status, body) = send(create_test_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["buildings"], json!(["С1", "С2"]));
        assert_eq!(body["lots"]["С2"][0]["number"], 7);
    }

    #[tokio::test]
    async fn test_calculate_profitability() {
        let payload = json!({ "building": "С1", "number": 101 });
        let (status, body) = send(create_test_router(), post_json("/api/calculate/profitability", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lot"]["code"], "С1-101");
        assert_eq!(body["price_projection"]["key_delivery_date"], "2029-11-01");
        assert_eq!(body["summary"]["payback_hotel_years"], 5);

        let payload = json!({ "building": "С3-1", "number": 1 });
        let (status, body) = send(create_test_router(), post_json("/api/calculate/profitability", payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Лот С3-1-1 не найден");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/api/options")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = create_test_router().oneshot(request).await.unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_spa_fallback_serves_index() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>calculator</html>").unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log(1)").unwrap();

        let mut config = AppConfig::load_default().unwrap();
        config.server.static_dir = Some(dist.path().to_path_buf());
        let router = create_router(AppState::new(LotRegistry::default()), &config);

        let request = Request::builder().uri("/profitability").body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>calculator</html>");

        let request = Request::builder().uri("/app.js").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"console.log(1)");
    }
}
