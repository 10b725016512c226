use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::ApiKey;
use crate::state::AppState;

/// Handler で ApiKey を受け取るための extractor
///
/// Assumes `middleware::auth::api_key` already inserted the key into
/// request extensions. A missing key means the route was mounted outside
/// the middleware, so this is a server error rather than a 401.
pub struct ApiKeyExtractor(pub ApiKey);

impl FromRequestParts<AppState> for ApiKeyExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<ApiKey>() {
            Some(key) => Ok(ApiKeyExtractor(key.clone())),
            None => {
                tracing::error!(
                    path = parts.uri.path(),
                    "ApiKeyExtractor used on a route without api key middleware"
                );
                Err(AppError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::api::v1::handlers::me::me;
    use crate::state::AppState;

    #[tokio::test]
    async fn missing_middleware_is_a_server_error() {
        let router = Router::new()
            .route("/me", get(me))
            .with_state(AppState::new());

        let req = Request::builder()
            .uri("/me")
            .header(header::AUTHORIZATION, "ApiKey k")
            .body(Body::empty())
            .unwrap();

        let res = router.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
