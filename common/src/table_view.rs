//! Filter and sort pipeline behind the query table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::analytics::SearchQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Query,
    Clicks,
    Impressions,
    Ctr,
    Position,
}

impl SortField {
    pub const METRICS: [SortField; 4] = [Self::Clicks, Self::Impressions, Self::Ctr, Self::Position];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Clicks => "clicks",
            Self::Impressions => "impressions",
            Self::Ctr => "ctr",
            Self::Position => "position",
        }
    }

    fn compare(&self, a: &SearchQuery, b: &SearchQuery) -> Ordering {
        match self {
            Self::Query => locale_compare(&a.query, &b.query),
            Self::Clicks => a.clicks.cmp(&b.clicks),
            Self::Impressions => a.impressions.cmp(&b.impressions),
            Self::Ctr => a.ctr.total_cmp(&b.ctr),
            Self::Position => a.position.total_cmp(&b.position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Single active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TableSort {
    fn default() -> Self {
        Self { field: SortField::Clicks, direction: SortDirection::Desc }
    }
}

impl TableSort {
    /// Header click: the active column flips, any other column starts descending.
    pub fn toggle(&self, field: SortField) -> Self {
        if self.field == field {
            Self { field, direction: self.direction.flipped() }
        } else {
            Self { field, direction: SortDirection::Desc }
        }
    }

    /// Direction shown on a header, `None` for inactive columns.
    pub fn indicator(&self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Case-folded comparison first so "apple" and "Banana" order the way a
/// reader expects; the exact comparison only breaks case-only ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

pub fn matches_filter(query: &SearchQuery, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || query.query.to_lowercase().contains(&filter.to_lowercase())
}

pub fn filter_queries(queries: &[SearchQuery], filter: &str) -> Vec<SearchQuery> {
    queries.iter().filter(|q| matches_filter(q, filter)).cloned().collect()
}

/// Stable: equal keys keep their incoming order in both directions.
pub fn sort_queries(queries: &mut [SearchQuery], sort: TableSort) {
    queries.sort_by(|a, b| {
        let ord = sort.field.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// The row the user clicked, kept as a full record.
///
/// Matching is by query text, so the selection follows its row through
/// re-sorting and re-filtering. Filtering a selected row out of view does not
/// clear it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection(Option<SearchQuery>);

impl Selection {
    pub fn select(&mut self, row: &SearchQuery) {
        self.0 = Some(row.clone());
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn is_selected(&self, query: &SearchQuery) -> bool {
        self.0.as_ref().is_some_and(|s| s.query == query.query)
    }

    pub fn current(&self) -> Option<&SearchQuery> {
        self.0.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub query: SearchQuery,
    pub selected: bool,
}

/// Builds a fresh row list from the fetched queries; the input is never modified.
pub fn derive_table_rows(
    queries: &[SearchQuery],
    filter: &str,
    sort: TableSort,
    selection: &Selection,
) -> Vec<TableRow> {
    let mut rows = filter_queries(queries, filter);
    sort_queries(&mut rows, sort);
    rows.into_iter()
        .map(|query| {
            let selected = selection.is_selected(&query);
            TableRow { query, selected }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_records() -> Vec<SearchQuery> {
        vec![
            SearchQuery::new("react tutorial", 1000, 10000, 10.0, 2.5),
            SearchQuery::new("javascript guide", 800, 12000, 6.7, 3.2),
        ]
    }

    fn names(rows: &[TableRow]) -> Vec<&str> {
        rows.iter().map(|r| r.query.query.as_str()).collect()
    }

    fn sample() -> Vec<SearchQuery> {
        vec![
            SearchQuery::new("React hooks", 500, 4000, 12.5, 1.9),
            SearchQuery::new("docker compose", 300, 9000, 3.3, 4.0),
            SearchQuery::new("react router", 500, 6000, 8.3, 2.2),
            SearchQuery::new("css grid", 120, 2000, 6.0, 6.1),
            SearchQuery::new("Preact signals", 80, 1500, 5.3, 3.0),
        ]
    }

    #[test]
    fn initial_sort_orders_by_clicks_desc() {
        let rows = derive_table_rows(&two_records(), "", TableSort::default(), &Selection::default());
        assert_eq!(names(&rows), ["react tutorial", "javascript guide"]);
    }

    #[test]
    fn toggling_to_ctr_twice_sorts_ascending() {
        let sort = TableSort::default().toggle(SortField::Ctr);
        assert_eq!(sort.direction, SortDirection::Desc);
        let sort = sort.toggle(SortField::Ctr);
        assert_eq!(sort, TableSort { field: SortField::Ctr, direction: SortDirection::Asc });

        let rows = derive_table_rows(&two_records(), "", sort, &Selection::default());
        assert_eq!(names(&rows), ["javascript guide", "react tutorial"]);
    }

    #[test]
    fn toggle_state_machine() {
        let sort = TableSort::default();
        let sort = sort.toggle(SortField::Impressions);
        assert_eq!(sort.direction, SortDirection::Desc);
        let sort = sort.toggle(SortField::Impressions);
        assert_eq!(sort.direction, SortDirection::Asc);
        let sort = sort.toggle(SortField::Impressions);
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort = sort.toggle(SortField::Impressions).toggle(SortField::Query);
        assert_eq!(sort, TableSort { field: SortField::Query, direction: SortDirection::Desc });

        // the active column flips from desc to asc on the first click
        let sort = TableSort::default().toggle(SortField::Clicks);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let rows = filter_queries(&sample(), "REACT");
        let names: Vec<_> = rows.iter().map(|q| q.query.as_str()).collect();
        assert_eq!(names, ["React hooks", "react router", "Preact signals"]);

        for q in filter_queries(&sample(), "ro") {
            assert!(q.query.to_lowercase().contains("ro"));
        }
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        assert_eq!(filter_queries(&sample(), ""), sample());
        assert_eq!(filter_queries(&sample(), "  "), sample());
    }

    #[test]
    fn desc_and_asc_are_reverses_without_ties() {
        let data = sample();
        for field in [SortField::Impressions, SortField::Ctr, SortField::Position] {
            let mut desc = data.clone();
            sort_queries(&mut desc, TableSort { field, direction: SortDirection::Desc });
            let mut asc = data.clone();
            sort_queries(&mut asc, TableSort { field, direction: SortDirection::Asc });
            asc.reverse();
            assert_eq!(desc, asc, "{field:?}");
        }
    }

    #[test]
    fn ties_keep_original_order() {
        let data = sample();
        for direction in [SortDirection::Desc, SortDirection::Asc] {
            let mut sorted = data.clone();
            sort_queries(&mut sorted, TableSort { field: SortField::Clicks, direction });
            let hooks = sorted.iter().position(|q| q.query == "React hooks").unwrap();
            let router = sorted.iter().position(|q| q.query == "react router").unwrap();
            assert_eq!(router, hooks + 1);
        }
    }

    #[test]
    fn query_sort_ignores_case() {
        let mut data = sample();
        sort_queries(&mut data, TableSort { field: SortField::Query, direction: SortDirection::Asc });
        let names: Vec<_> = data.iter().map(|q| q.query.as_str()).collect();
        assert_eq!(names, ["css grid", "docker compose", "Preact signals", "React hooks", "react router"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let data = sample();
        let before = data.clone();
        let _ = derive_table_rows(&data, "react", TableSort { field: SortField::Ctr, direction: SortDirection::Asc }, &Selection::default());
        assert_eq!(data, before);
    }

    #[test]
    fn selection_highlights_by_query_text() {
        let data = two_records();
        let mut selection = Selection::default();
        selection.select(&SearchQuery::new("javascript guide", 0, 0, 0.0, 1.0));
        let rows = derive_table_rows(&data, "", TableSort::default(), &selection);
        assert_eq!(rows.iter().map(|r| r.selected).collect::<Vec<_>>(), [false, true]);

        let rows = derive_table_rows(&data, "react", TableSort::default(), &selection);
        assert!(rows.iter().all(|r| !r.selected));
        assert!(selection.current().is_some());

        selection.clear();
        assert!(!selection.is_selected(&data[1]));
        assert_eq!(selection.current(), None);
    }
}
