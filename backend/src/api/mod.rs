//! Analytics API entry points used by server functions and extra routes.

mod search_analytics;
pub use search_analytics::{get_analytics_source, get_search_analytics};
