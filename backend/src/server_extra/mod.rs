//! Extra axum routes mounted next to the Dioxus router.

pub mod search_analytics_json;
