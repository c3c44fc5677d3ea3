//! Shared API data transfer objects.

pub mod api;
pub mod club;
pub mod registration;
pub mod roster;
