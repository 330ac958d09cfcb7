//! Shared frontend state definitions.

pub mod dashboard_control;
pub mod timer;
