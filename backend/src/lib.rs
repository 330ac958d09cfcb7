//! Server side of the search analytics dashboard.

pub mod api;
pub mod config;
pub mod data_source;
pub mod server_extra;
