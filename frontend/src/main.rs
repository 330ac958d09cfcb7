//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use backend::server_extra::search_analytics_json::{SEARCH_ANALYTICS_JSON_ROUTE, search_analytics_json};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route(SEARCH_ANALYTICS_JSON_ROUTE, axum::routing::get(search_analytics_json))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::debug!("{} -> {}", path, res.status());
                    res
                },
            )))
    });
}
