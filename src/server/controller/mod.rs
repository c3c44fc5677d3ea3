//! HTTP controller endpoints for the Agentfolio web API.
//!
//! Controllers stay thin: they deserialize the request, hand off to a
//! service, and map the returned models into DTOs. Error mapping lives on the
//! error types themselves via `IntoResponse`.

pub mod agent;
pub mod auth;
pub mod club;
pub mod roster;
