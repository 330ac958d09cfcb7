//! Shared search analytics models.

use serde::{Deserialize, Serialize};

use crate::date_range::{DateRange, format_date_for_api};

/// One row of the top-queries report. `query` is the key within a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, clicks: u64, impressions: u64, ctr: f64, position: f64) -> Self {
        Self { query: query.into(), clicks, impressions, ctr, position }
    }

    pub fn ctr_grade(&self) -> MetricGrade {
        MetricGrade::for_ctr(self.ctr)
    }

    pub fn position_grade(&self) -> MetricGrade {
        MetricGrade::for_position(self.position)
    }
}

/// Daily totals, `date` is `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub date: String,
    pub clicks: u64,
    pub impressions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsData {
    pub top_queries: Vec<SearchQuery>,
    pub time_series: Vec<TimeSeriesData>,
}

/// Request parameters of the analytics data source.
///
/// This is also the request-cache key: two requests with equal variables are
/// the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsVariables {
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl SearchAnalyticsVariables {
    /// A blank filter is omitted rather than sent as an empty string.
    pub fn new(date_range: &DateRange, filter: &str) -> Self {
        let filter = filter.trim();
        Self {
            start_date: format_date_for_api(&date_range.start_date),
            end_date: format_date_for_api(&date_range.end_date),
            filter: if filter.is_empty() { None } else { Some(filter.to_string()) },
        }
    }
}

/// Colour band of a metric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGrade {
    Good,
    Fair,
    Poor,
}

impl MetricGrade {
    pub fn for_ctr(ctr: f64) -> Self {
        if ctr > 10.0 {
            Self::Good
        } else if ctr > 5.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lower positions rank better.
    pub fn for_position(position: f64) -> Self {
        if position <= 2.0 {
            Self::Good
        } else if position <= 5.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#059669",
            Self::Fair => "#D97706",
            Self::Poor => "#DC2626",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn range() -> DateRange {
        DateRange::default_for(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
    }

    #[test]
    fn variables_format_dates_for_api() {
        let vars = SearchAnalyticsVariables::new(&range(), "");
        assert_eq!(vars.start_date, "2024-01-02");
        assert_eq!(vars.end_date, "2024-01-31");
        assert_eq!(vars.filter, None);
    }

    #[test]
    fn blank_filter_is_omitted_from_request() {
        let vars = SearchAnalyticsVariables::new(&range(), "   ");
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json, serde_json::json!({"startDate": "2024-01-02", "endDate": "2024-01-31"}));

        let vars = SearchAnalyticsVariables::new(&range(), " react ");
        assert_eq!(vars.filter.as_deref(), Some("react"));
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let raw = r#"{
            "topQueries": [{"query": "react tutorial", "clicks": 1000, "impressions": 10000, "ctr": 10.0, "position": 2.5}],
            "timeSeries": [{"date": "2024-01-01", "clicks": 10, "impressions": 100}]
        }"#;
        let data: SearchAnalyticsData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.top_queries[0], SearchQuery::new("react tutorial", 1000, 10000, 10.0, 2.5));
        assert_eq!(data.time_series[0].date, "2024-01-01");
    }

    #[test]
    fn grades_follow_thresholds() {
        assert_eq!(MetricGrade::for_ctr(10.0), MetricGrade::Fair);
        assert_eq!(MetricGrade::for_ctr(10.1), MetricGrade::Good);
        assert_eq!(MetricGrade::for_ctr(6.7), MetricGrade::Fair);
        assert_eq!(MetricGrade::for_ctr(5.0), MetricGrade::Poor);
        assert_eq!(MetricGrade::for_position(2.0), MetricGrade::Good);
        assert_eq!(MetricGrade::for_position(3.2), MetricGrade::Fair);
        assert_eq!(MetricGrade::for_position(5.1), MetricGrade::Poor);
    }
}
