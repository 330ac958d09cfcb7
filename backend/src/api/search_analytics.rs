//! Search analytics endpoint.

use common::analytics::{SearchAnalyticsData, SearchAnalyticsVariables};

use crate::data_source::{AnalyticsSource, MockAnalyticsSource};

pub fn get_analytics_source() -> MockAnalyticsSource {
    MockAnalyticsSource::from_env()
}

pub async fn get_search_analytics(variables: SearchAnalyticsVariables) -> anyhow::Result<SearchAnalyticsData> {
    tracing::info!(
        "Search analytics request: {} .. {} filter={:?}",
        variables.start_date,
        variables.end_date,
        variables.filter
    );
    let source = get_analytics_source();
    let data = source.fetch(variables).await?;
    tracing::info!("Search analytics response: {} queries, {} days", data.top_queries.len(), data.time_series.len());
    Ok(data)
}
