//! Server application core modules.
//!
//! This module contains all server-side functionality for the Agentfolio
//! application: HTTP routing, registration and representation lifecycle
//! services, roster management, the club catalog deduplication matcher, and
//! the database access layer.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
