//! Dashboard state owner shared with the components through context.

use chrono::Local;
use dioxus::{core::Task, logger::tracing, prelude::*};

use common::{
    analytics::SearchQuery,
    analytics_const::DEBOUNCE_DELAY_MS,
    dashboard_view::{DashboardState, DashboardView},
    date_range::DateRange,
    table_view::SortField,
};

use crate::{api::analytics_api::use_search_analytics, data_definitions::timer::sleep_ms};

#[derive(Clone, Copy)]
pub struct DashboardControl {
    pub view: Memo<DashboardView>,
    pub date_range: Memo<DateRange>,
    pub raw_filter: Memo<String>,
    pub set_date_range: Callback<DateRange>,
    pub edit_filter: Callback<String>,
    pub toggle_sort: Callback<SortField>,
    pub select_row: Callback<SearchQuery>,
    pub close_detail: Callback<()>,
}

/// Creates the dashboard state, wires the fetch and provides the control as context.
pub fn use_dashboard_control() -> DashboardControl {
    let mut state = use_signal(|| DashboardState::new(Local::now().date_naive()));
    let mut filter_timer = use_signal(|| None::<Task>);

    let variables = use_memo(move || state.read().variables());
    let fetch_status = use_search_analytics(variables);
    let view = use_memo(move || DashboardView::build(&state.read(), &fetch_status.read()));
    let date_range = use_memo(move || state.read().date_range);
    let raw_filter = use_memo(move || state.read().filter.raw().clone());

    let set_date_range = Callback::new(move |range: DateRange| {
        if range.is_inverted() {
            tracing::warn!("Start date is after end date: {}", range.display_label());
        }
        tracing::info!("Date range changed: {}", range.display_label());
        state.write().update_date_range(range.start_date, range.end_date);
    });

    let edit_filter = Callback::new(move |raw: String| {
        let ticket = state.write().edit_filter(raw);
        if let Some(pending) = filter_timer.write().take() {
            pending.cancel();
        }
        let task = spawn(async move {
            sleep_ms(DEBOUNCE_DELAY_MS).await;
            let mut state = state;
            if state.write().settle_filter(ticket) {
                tracing::info!("Query filter settled: {:?}", state.peek().filter.settled());
            }
        });
        filter_timer.set(Some(task));
    });

    let toggle_sort = Callback::new(move |field: SortField| {
        state.write().toggle_sort(field);
        tracing::info!("Sort changed: {:?}", state.peek().sort);
    });

    let select_row = Callback::new(move |query: SearchQuery| {
        tracing::info!("Selected query: {}", query.query);
        state.write().select_row(&query);
    });

    let close_detail = Callback::new(move |_: ()| {
        state.write().close_detail();
    });

    use_context_provider(move || DashboardControl {
        view,
        date_range,
        raw_filter,
        set_date_range,
        edit_filter,
        toggle_sort,
        select_row,
        close_detail,
    })
}
