//! Domain types shared across the workspace.
//!
//! Structure only: the orchestration logic lives in the supervisor,
//! HTTP plumbing in the client crate.

pub mod detection;
pub mod report;
pub mod session;
