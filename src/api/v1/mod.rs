/*
 * Responsibility
 * - Public surface of v1 (re-export routes() etc.)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
