//! Agentfolio backend library.
//!
//! Exposes the shared API data models and the server application core so that
//! integration tests can call controllers and services directly.

pub mod model;
pub mod server;
