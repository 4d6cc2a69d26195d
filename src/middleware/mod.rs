/*
 * Responsibility
 * - middleware public interface
 * - auth::gate (identity), cors, http (request id / trace / limits)
 */
pub mod auth;
pub mod cors;
pub mod http;
