//! API key middleware → ApiKey を extensions に入れる
//!
//! Responsibility:
//! - Parse `Authorization: ApiKey <token>` (header lookup -> parse -> reject)
//! - Refuse an empty key here; the parser itself accepts `"ApiKey "`
//! - On success, put the ApiKey into request extensions for `ApiKeyExtractor`
//!
//! Whether the key is actually known is a downstream concern.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{ApiKey, ApiKeyError, get_api_key};
use crate::state::AppState;

/// Require an API key on every route of `router`.
///
/// ```ignore
/// let protected = middleware::auth::api_key::apply(Router::new().route("/me", get(me)));
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let parsed = get_api_key(req.headers()).and_then(|key| {
        if key.is_empty() {
            Err(ApiKeyError::MalformedHeader)
        } else {
            Ok(ApiKey::new(key))
        }
    });

    let key = match parsed {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                method = %req.method(),
                path = req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(fingerprint = %key.fingerprint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(key);

    Ok(next.run(req).await)
}
