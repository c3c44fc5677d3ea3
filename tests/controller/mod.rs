//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with an in-memory database state, verifying
//! request handling, response status codes, and the persisted side effects.

mod agent;
mod auth;
mod club;
mod roster;
