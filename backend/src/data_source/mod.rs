//! Analytics data sources.

mod mock;
pub use mock::{MockAnalyticsSource, mock_top_queries};

use std::future::Future;

use common::analytics::{SearchAnalyticsData, SearchAnalyticsVariables};

/// Anything that can answer a search analytics request: a mock with an
/// artificial delay today, a real backend later.
pub trait AnalyticsSource {
    fn fetch(&self, variables: SearchAnalyticsVariables) -> impl Future<Output = anyhow::Result<SearchAnalyticsData>> + Send;
}
