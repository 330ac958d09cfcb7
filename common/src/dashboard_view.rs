//! Dashboard state transitions and the derived view.
//!
//! The dashboard owns one [`DashboardState`]. Every user event replaces one of
//! its fields; the view is rebuilt from scratch with [`DashboardView::build`]
//! after each transition or completed fetch.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    analytics::{SearchAnalyticsData, SearchAnalyticsVariables, SearchQuery, TimeSeriesData},
    date_range::DateRange,
    debounce::{DebounceTicket, Debounced},
    request_cache::FetchStatus,
    summary::AggregateSummary,
    table_view::{Selection, SortField, TableRow, TableSort, derive_table_rows},
};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub date_range: DateRange,
    pub filter: Debounced<String>,
    pub sort: TableSort,
    pub selected: Selection,
}

impl DashboardState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date_range: DateRange::default_for(today),
            filter: Debounced::new(String::new()),
            sort: TableSort::default(),
            selected: Selection::default(),
        }
    }

    /// Fetch parameters. Only the settled filter takes part.
    pub fn variables(&self) -> SearchAnalyticsVariables {
        SearchAnalyticsVariables::new(&self.date_range, self.filter.settled())
    }

    pub fn update_date_range(&mut self, new_start: NaiveDateTime, new_end: NaiveDateTime) {
        self.date_range = DateRange::update(new_start, new_end);
    }

    pub fn edit_filter(&mut self, raw: String) -> DebounceTicket {
        self.filter.edit(raw)
    }

    pub fn settle_filter(&mut self, ticket: DebounceTicket) -> bool {
        self.filter.settle(ticket)
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
    }

    pub fn select_row(&mut self, query: &SearchQuery) {
        self.selected.select(query);
    }

    pub fn close_detail(&mut self) {
        self.selected.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Pending,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailChartPayload {
    pub query_name: String,
    pub time_series: Vec<TimeSeriesData>,
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub status: ViewStatus,
    pub rows: Vec<TableRow>,
    pub sort: TableSort,
    pub summary: Option<AggregateSummary>,
    pub detail: Option<DetailChartPayload>,
}

impl DashboardView {
    pub fn build(state: &DashboardState, fetch: &FetchStatus<SearchAnalyticsData>) -> Self {
        let data = match fetch {
            FetchStatus::Pending => return Self::without_data(state, ViewStatus::Pending),
            FetchStatus::Failed(message) => return Self::without_data(state, ViewStatus::Failed(message.clone())),
            FetchStatus::Ready(data) => data,
        };

        let rows = derive_table_rows(&data.top_queries, state.filter.settled(), state.sort, &state.selected);
        let summary = AggregateSummary::from_rows(&rows);
        let detail = state.selected.current().map(|selected| DetailChartPayload {
            query_name: selected.query.clone(),
            time_series: data.time_series.clone(),
        });
        Self { status: ViewStatus::Ready, rows, sort: state.sort, summary: Some(summary), detail }
    }

    fn without_data(state: &DashboardState, status: ViewStatus) -> Self {
        Self { status, rows: Vec::new(), sort: state.sort, summary: None, detail: None }
    }
}

#[cfg(test)]
mod tests {
    use crate::date_range::{end_of_day, start_of_day};
    use crate::table_view::SortDirection;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    fn data() -> SearchAnalyticsData {
        SearchAnalyticsData {
            top_queries: vec![
                SearchQuery::new("react tutorial", 1000, 10000, 10.0, 2.5),
                SearchQuery::new("javascript guide", 800, 12000, 6.7, 3.2),
            ],
            time_series: vec![
                TimeSeriesData { date: "2024-01-30".to_string(), clicks: 90, impressions: 900 },
                TimeSeriesData { date: "2024-01-31".to_string(), clicks: 110, impressions: 1000 },
            ],
        }
    }

    fn names(view: &DashboardView) -> Vec<&str> {
        view.rows.iter().map(|r| r.query.query.as_str()).collect()
    }

    #[test]
    fn initial_view_sorted_by_clicks() {
        let mut state = DashboardState::new(today());
        let fetch = FetchStatus::Ready(data());
        let view = DashboardView::build(&state, &fetch);
        assert_eq!(view.status, ViewStatus::Ready);
        assert_eq!(names(&view), ["react tutorial", "javascript guide"]);

        state.toggle_sort(SortField::Ctr);
        state.toggle_sort(SortField::Ctr);
        let view = DashboardView::build(&state, &fetch);
        assert_eq!(view.sort, TableSort { field: SortField::Ctr, direction: SortDirection::Asc });
        assert_eq!(names(&view), ["javascript guide", "react tutorial"]);
    }

    #[test]
    fn empty_single_day_renders_zero_rows() {
        let mut state = DashboardState::new(today());
        state.update_date_range(start_of_day(today()), end_of_day(today()));
        let vars = state.variables();
        assert_eq!(vars.start_date, vars.end_date);

        let empty = SearchAnalyticsData::default();
        let view = DashboardView::build(&state, &FetchStatus::Ready(empty));
        assert!(view.rows.is_empty());
        let summary = view.summary.unwrap();
        assert_eq!(summary.cards()[0].to_string(), "Total Queries: 0");
        assert_eq!(summary.average_ctr, 0.0);
    }

    #[test]
    fn selection_survives_filtering() {
        let mut state = DashboardState::new(today());
        let fetch = FetchStatus::Ready(data());
        let view = DashboardView::build(&state, &fetch);
        state.select_row(&view.rows[0].query);

        let ticket = state.edit_filter("javascript".to_string());
        assert!(state.settle_filter(ticket));
        let view = DashboardView::build(&state, &fetch);

        assert_eq!(state.selected.current().map(|q| q.query.as_str()), Some("react tutorial"));
        assert_eq!(names(&view), ["javascript guide"]);
        assert!(view.rows.iter().all(|r| !r.selected));
        // chart stays open for the retained selection
        assert_eq!(view.detail.unwrap().query_name, "react tutorial");
    }

    #[test]
    fn unsettled_filter_changes_nothing() {
        let mut state = DashboardState::new(today());
        let before = state.variables();
        state.edit_filter("java".to_string());
        assert_eq!(state.variables(), before);

        let view = DashboardView::build(&state, &FetchStatus::Ready(data()));
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn settled_filter_reaches_request() {
        let mut state = DashboardState::new(today());
        let ticket = state.edit_filter("react".to_string());
        state.settle_filter(ticket);
        assert_eq!(state.variables().filter.as_deref(), Some("react"));
    }

    #[test]
    fn close_detail_clears_selection() {
        let mut state = DashboardState::new(today());
        let fetch = FetchStatus::Ready(data());
        state.select_row(&data().top_queries[1]);
        let view = DashboardView::build(&state, &fetch);
        let detail = view.detail.unwrap();
        assert_eq!(detail.query_name, "javascript guide");
        assert_eq!(detail.time_series.len(), 2);
        assert!(view.rows[1].selected);

        state.close_detail();
        assert_eq!(state.selected.current(), None);
        assert_eq!(DashboardView::build(&state, &fetch).detail, None);
    }

    #[test]
    fn failure_shows_no_partial_data() {
        let mut state = DashboardState::new(today());
        state.select_row(&data().top_queries[0]);
        let view = DashboardView::build(&state, &FetchStatus::Failed("network unreachable".to_string()));
        assert_eq!(view.status, ViewStatus::Failed("network unreachable".to_string()));
        assert!(view.rows.is_empty());
        assert_eq!(view.summary, None);
        assert_eq!(view.detail, None);

        let view = DashboardView::build(&state, &FetchStatus::Pending);
        assert_eq!(view.status, ViewStatus::Pending);
        assert!(view.rows.is_empty());
    }
}
