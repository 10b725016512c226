/*
 * Responsibility
 * - Response body of GET /me
 * - Never carries the raw key, only its fingerprint
 */
use serde::Serialize;

use crate::services::auth::{API_KEY_SCHEME, ApiKey};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}

impl From<&ApiKey> for MeResponse {
    fn from(key: &ApiKey) -> Self {
        Self {
            scheme: API_KEY_SCHEME,
            fingerprint: key.fingerprint(),
        }
    }
}
