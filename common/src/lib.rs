//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod analytics;
pub mod analytics_const;
pub mod date_range;
pub mod debounce;
pub mod table_view;
pub mod summary;
pub mod request_cache;
pub mod dashboard_view;
pub mod chart;
