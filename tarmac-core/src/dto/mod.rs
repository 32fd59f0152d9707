//! DTOs for the supervisor's HTTP surface
//!
//! Shared between the supervisor (serializes) and the CLI/client crate
//! (deserializes).

pub mod chat;
pub mod report;
