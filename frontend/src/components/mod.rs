//! UI components.

pub mod error_boundary;
pub mod loading_indicator;
pub mod header;
pub mod dashboard_components;
