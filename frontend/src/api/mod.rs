//! Server functions and client-side fetch hooks.

pub mod analytics_api;
