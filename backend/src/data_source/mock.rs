//! Deterministic in-memory analytics data.

use std::time::Duration;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use common::{
    analytics::{SearchAnalyticsData, SearchAnalyticsVariables, SearchQuery, TimeSeriesData},
    date_range::{days_between, parse_input_date},
    table_view::{SortDirection, SortField, TableSort, filter_queries, sort_queries},
};

use crate::{config::AnalyticsConfig, data_source::AnalyticsSource};

const BASE_DAILY_CLICKS: f64 = 5000.0;
const BASE_DAILY_IMPRESSIONS: f64 = 50000.0;
/// Daily values move within +/- this fraction of the base.
const DAILY_VARIATION: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct MockAnalyticsSource {
    pub delay: Duration,
    pub top_queries_limit: usize,
    pub max_range_days: i64,
    pub fail: bool,
}

impl MockAnalyticsSource {
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            delay: config.mock_delay,
            top_queries_limit: config.top_queries_limit,
            max_range_days: config.max_range_days,
            fail: config.mock_fail,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&AnalyticsConfig::from_env())
    }

    fn build_payload(&self, start: NaiveDate, end: NaiveDate, filter: Option<&str>) -> SearchAnalyticsData {
        let catalogue = mock_top_queries();
        let total_clicks: u64 = catalogue.iter().map(|q| q.clicks).sum();

        let mut top_queries = filter_queries(&catalogue, filter.unwrap_or(""));
        sort_queries(&mut top_queries, TableSort { field: SortField::Clicks, direction: SortDirection::Desc });
        top_queries.truncate(self.top_queries_limit);

        // a filtered series only carries the share of traffic of the matching queries
        let share = match filter {
            Some(_) if total_clicks > 0 => {
                let matching: u64 = filter_queries(&catalogue, filter.unwrap_or("")).iter().map(|q| q.clicks).sum();
                matching as f64 / total_clicks as f64
            }
            _ => 1.0,
        };
        let time_series = days_between(start, end).map(|day| daily_point(day, share)).collect();

        SearchAnalyticsData { top_queries, time_series }
    }
}

impl AnalyticsSource for MockAnalyticsSource {
    async fn fetch(&self, variables: SearchAnalyticsVariables) -> anyhow::Result<SearchAnalyticsData> {
        let start = parse_input_date(&variables.start_date).context("Invalid startDate")?;
        let end = parse_input_date(&variables.end_date).context("Invalid endDate")?;
        if start > end {
            tracing::warn!("Inverted date range {} > {}, passing through", variables.start_date, variables.end_date);
        }
        let span_days = (end - start).num_days() + 1;
        if span_days > self.max_range_days {
            anyhow::bail!(
                "Date range {} .. {} covers {} days, the limit is {}",
                variables.start_date,
                variables.end_date,
                span_days,
                self.max_range_days
            );
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            anyhow::bail!("An error occurred while fetching analytics data (mock source is configured to fail)");
        }
        Ok(self.build_payload(start, end, variables.filter.as_deref()))
    }
}

fn daily_point(day: NaiveDate, share: f64) -> TimeSeriesData {
    let factor = 1.0 + day_variation(day);
    TimeSeriesData {
        date: day.format(common::analytics_const::API_DATE_FORMAT).to_string(),
        clicks: (BASE_DAILY_CLICKS * share * factor).round() as u64,
        impressions: (BASE_DAILY_IMPRESSIONS * share * factor).round() as u64,
    }
}

/// Stable pseudo-random value in `[-DAILY_VARIATION, DAILY_VARIATION)` for a day.
fn day_variation(day: NaiveDate) -> f64 {
    let mut x = day.num_days_from_ce() as u64;
    // splitmix64 finalizer
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    let unit = (x >> 11) as f64 / (1_u64 << 53) as f64;
    unit * 2.0 * DAILY_VARIATION - DAILY_VARIATION
}

pub fn mock_top_queries() -> Vec<SearchQuery> {
    vec![
        SearchQuery::new("react typescript tutorial", 12500, 85000, 14.7, 2.3),
        SearchQuery::new("javascript best practices", 9800, 120000, 8.2, 3.1),
        SearchQuery::new("web development 2024", 8900, 95000, 9.4, 2.8),
        SearchQuery::new("nodejs express api", 7600, 78000, 9.7, 2.5),
        SearchQuery::new("css grid flexbox", 6800, 89000, 7.6, 3.4),
        SearchQuery::new("react hooks useState", 6200, 67000, 9.3, 2.7),
        SearchQuery::new("mongodb vs postgresql", 5900, 45000, 13.1, 1.9),
        SearchQuery::new("docker containerization", 5400, 52000, 10.4, 2.2),
        SearchQuery::new("graphql vs rest api", 4800, 38000, 12.6, 2.1),
        SearchQuery::new("typescript interfaces", 4500, 41000, 11.0, 2.4),
        SearchQuery::new("responsive web design", 4200, 68000, 6.2, 4.1),
        SearchQuery::new("aws serverless lambda", 3800, 29000, 13.1, 1.8),
        SearchQuery::new("unit testing jest", 3500, 35000, 10.0, 2.6),
        SearchQuery::new("git workflow branching", 3200, 42000, 7.6, 3.2),
        SearchQuery::new("performance optimization", 2900, 38000, 7.6, 3.3),
        SearchQuery::new("security vulnerabilities", 2600, 31000, 8.4, 2.9),
        SearchQuery::new("microservices architecture", 2400, 26000, 9.2, 2.7),
        SearchQuery::new("ci cd pipeline", 2100, 24000, 8.8, 3.0),
        SearchQuery::new("kubernetes deployment", 1900, 21000, 9.0, 2.8),
        SearchQuery::new("database optimization", 1700, 19000, 8.9, 2.9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MockAnalyticsSource {
        MockAnalyticsSource { delay: Duration::ZERO, top_queries_limit: 20, max_range_days: 366, fail: false }
    }

    fn vars(start: &str, end: &str, filter: Option<&str>) -> SearchAnalyticsVariables {
        SearchAnalyticsVariables { start_date: start.to_string(), end_date: end.to_string(), filter: filter.map(str::to_string) }
    }

    #[tokio::test]
    async fn returns_top_queries_by_clicks() {
        let data = source().fetch(vars("2024-01-01", "2024-01-31", None)).await.unwrap();
        assert_eq!(data.top_queries.len(), 20);
        assert_eq!(data.top_queries[0].query, "react typescript tutorial");
        assert!(data.top_queries.windows(2).all(|w| w[0].clicks >= w[1].clicks));
    }

    #[tokio::test]
    async fn time_series_has_one_point_per_day() {
        let data = source().fetch(vars("2024-01-01", "2024-01-31", None)).await.unwrap();
        assert_eq!(data.time_series.len(), 31);
        assert_eq!(data.time_series[0].date, "2024-01-01");
        assert_eq!(data.time_series[30].date, "2024-01-31");
        assert!(data.time_series.windows(2).all(|w| w[0].date < w[1].date));
        for point in &data.time_series {
            assert!((4000..=6000).contains(&point.clicks), "{point:?}");
            assert!((40000..=60000).contains(&point.impressions), "{point:?}");
        }
    }

    #[tokio::test]
    async fn identical_requests_give_identical_payloads() {
        let a = source().fetch(vars("2024-02-01", "2024-02-10", Some("react"))).await.unwrap();
        let b = source().fetch(vars("2024-02-01", "2024-02-10", Some("react"))).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn filter_and_limit_apply_server_side() {
        let data = source().fetch(vars("2024-01-01", "2024-01-01", Some("REACT"))).await.unwrap();
        let names: Vec<_> = data.top_queries.iter().map(|q| q.query.as_str()).collect();
        assert_eq!(names, ["react typescript tutorial", "react hooks useState"]);
        assert_eq!(data.time_series.len(), 1);
        assert!(data.time_series[0].clicks < 2000);

        let limited = MockAnalyticsSource { top_queries_limit: 3, ..source() };
        let data = limited.fetch(vars("2024-01-01", "2024-01-01", None)).await.unwrap();
        assert_eq!(data.top_queries.len(), 3);
    }

    #[tokio::test]
    async fn inverted_range_passes_through() {
        let data = source().fetch(vars("2024-01-31", "2024-01-01", None)).await.unwrap();
        assert!(data.time_series.is_empty());
        assert_eq!(data.top_queries.len(), 20);
    }

    #[tokio::test]
    async fn bad_dates_and_forced_failures_are_errors() {
        let err = source().fetch(vars("yesterday", "2024-01-01", None)).await.unwrap_err();
        assert!(err.to_string().contains("startDate"));

        let failing = MockAnalyticsSource { fail: true, ..source() };
        assert!(failing.fetch(vars("2024-01-01", "2024-01-02", None)).await.is_err());
    }

    #[tokio::test]
    async fn oversized_range_is_rejected() {
        let err = source().fetch(vars("0001-01-01", "9999-12-31", None)).await.unwrap_err();
        assert!(err.to_string().contains("limit is 366"), "{err}");

        // a full leap year is still allowed
        let data = source().fetch(vars("2024-01-01", "2024-12-31", None)).await.unwrap();
        assert_eq!(data.time_series.len(), 366);
        assert!(source().fetch(vars("2024-01-01", "2025-01-01", None)).await.is_err());

        let narrow = MockAnalyticsSource { max_range_days: 7, ..source() };
        assert!(narrow.fetch(vars("2024-01-01", "2024-01-07", None)).await.is_ok());
        assert!(narrow.fetch(vars("2024-01-01", "2024-01-08", None)).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn answers_after_the_configured_delay() {
        let slow = MockAnalyticsSource { delay: Duration::from_millis(500), ..source() };
        let started = tokio::time::Instant::now();
        slow.fetch(vars("2024-01-01", "2024-01-02", None)).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
