// JSON body extractor whose rejections come back as `{"detail": ...}`
use axum::extract::FromRequest;

use crate::error::EngineError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(EngineError))]
pub struct ApiJson<T>(pub T);
