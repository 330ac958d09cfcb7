use dioxus::prelude::*;

use common::dashboard_view::ViewStatus;
use crate::{
    components::{
        dashboard_components::{
            date_range_picker::DateRangePicker, detail_chart::DetailChart, metric_table::MetricTable,
            query_filter::QueryFilter, summary_cards::SummaryCards,
        },
        error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay},
        loading_indicator::LoadingIndicator,
    },
    data_definitions::dashboard_control::use_dashboard_control,
};

/// Dashboard page
#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Title { "Search Analytics Dashboard" }
        DashboardPageRootComponent {}
    }
}

#[component]
fn DashboardPageRootComponent() -> Element {
    let control = use_dashboard_control();
    let view = control.view.read().clone();

    rsx! {
        div {
            id: "x-dashboard-content",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                max-width: 1280px;
                margin: 0 auto;
                padding: 32px 16px;
            ",

            div {
                class: "x-metric-card",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: flex-end;
                    gap: 16px;
                ",
                DateRangePicker {}
                QueryFilter {}
            }

            match view.status {
                ViewStatus::Pending => rsx! {
                    LoadingIndicator { label: "Loading analytics data...".to_string() }
                },
                ViewStatus::Failed(message) => rsx! {
                    div {
                        class: "x-metric-card",
                        ComponentErrorDisplay {
                            title: "Failed to load data".to_string(),
                            error_txt: message,
                        }
                    }
                },
                ViewStatus::Ready => rsx! {
                    if let Some(summary) = view.summary {
                        SummaryCards { summary }
                    }
                    MetricTable {
                        rows: view.rows,
                        sort: view.sort,
                        on_sort: control.toggle_sort,
                        on_row_click: control.select_row,
                    }
                    if let Some(payload) = view.detail {
                        ComponentErrorBoundary {
                            DetailChart { payload, on_close: control.close_detail }
                        }
                    }
                },
            }
        }
    }
}
