/*
 * Responsibility
 * - Request extractors shared by v1 handlers
 */
mod api_key;

pub use api_key::ApiKeyExtractor;
