/*
 * Responsibility
 * - URL layout of v1
 * - Decide which routes sit behind the api key middleware
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::me};

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = middleware::auth::api_key::apply(Router::new().route("/me", get(me)));

    public.merge(protected)
}
