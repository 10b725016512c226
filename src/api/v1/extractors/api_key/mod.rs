/*!
 * API key extractor
 *
 * Responsibility:
 * - Hand the ApiKey accepted by the middleware to handlers
 * - The ApiKey type itself lives in services::auth (no axum dependency there)
 *
 * Public API:
 * - ApiKeyExtractor
 */

mod core;

pub use self::core::ApiKeyExtractor;
