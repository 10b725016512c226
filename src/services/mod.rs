/*
 * Responsibility
 * - HTTP-independent domain logic (header parsing, key fingerprints)
 * - middleware / extractors call into here, never the other way around
 */
pub mod auth;
