/*
 * Responsibility
 * - Public interface of the middleware layer (re-exports)
 * - http::apply (transport concerns), auth::api_key::apply (credentials)
 */
pub mod auth;
pub mod http;
