// HTTP services exposed by the engine
pub mod pricing_service;

pub use pricing_service::{create_router, AppState};
