/*
 * Responsibility
 * - GET /me: describe the caller's API key without revealing it
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::ApiKeyExtractor};

pub async fn me(ApiKeyExtractor(key): ApiKeyExtractor) -> Json<MeResponse> {
    Json(MeResponse::from(&key))
}
