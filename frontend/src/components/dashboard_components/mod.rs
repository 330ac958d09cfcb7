//! Dashboard controls, table and chart.

pub mod date_range_picker;
pub mod query_filter;
pub mod summary_cards;
pub mod metric_table;
pub mod detail_chart;
