use axum::{
    Json,
    body::Body,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::analytics::SearchAnalyticsVariables;
use tracing::info;

use crate::{api::get_analytics_source, data_source::AnalyticsSource};

pub const SEARCH_ANALYTICS_JSON_ROUTE: &str = "/_search_analytics";

async fn _search_analytics_json<S: AnalyticsSource>(source: &S, variables: SearchAnalyticsVariables) -> Response {
    info!("JSON search analytics: {:?}", variables);
    match source.fetch(variables).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            tracing::error!("search_analytics_json: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

/// `GET /_search_analytics?startDate=2024-01-01&endDate=2024-01-31&filter=react`
pub async fn search_analytics_json(Query(variables): Query<SearchAnalyticsVariables>) -> Response {
    let source = get_analytics_source();
    _search_analytics_json(&source, variables).await
}
