//! Client API calls for the search analytics endpoint.

use std::rc::Rc;

use common::{
    analytics::{SearchAnalyticsData, SearchAnalyticsVariables},
    request_cache::{FetchStatus, RequestCache},
};
use dioxus::prelude::*;


#[server]
pub async fn get_search_analytics(variables: SearchAnalyticsVariables) -> Result<SearchAnalyticsData, ServerFnError> {
    let x = backend::api::get_search_analytics(variables).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

fn error_message(error: ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message,
        other => other.to_string(),
    }
}

/// Fetches analytics for the current variables.
///
/// Requests are shared per variables tuple, and a completion is only shown
/// while its variables are still the current ones.
pub fn use_search_analytics(variables: Memo<SearchAnalyticsVariables>) -> Memo<FetchStatus<SearchAnalyticsData>> {
    let cache = use_hook(|| Rc::new(RequestCache::<SearchAnalyticsVariables, SearchAnalyticsData>::new()));

    let response = use_resource(move || {
        let variables = variables();
        let request = cache.request(&variables, |variables| async move {
            get_search_analytics(variables).await.map_err(error_message)
        });
        async move {
            let result = request.await;
            (variables, result)
        }
    });

    use_memo(move || FetchStatus::for_request(&variables(), response.read().as_ref()))
}
