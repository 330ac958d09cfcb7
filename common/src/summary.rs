//! Aggregates over the displayed rows and number formatting.

use crate::table_view::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateSummary {
    pub total_queries: usize,
    pub total_clicks: u64,
    pub total_impressions: u64,
    pub average_ctr: f64,
}

impl AggregateSummary {
    /// Computed from the filtered and sorted rows, not the full fetched set.
    pub fn from_rows(rows: &[TableRow]) -> Self {
        let total_queries = rows.len();
        let total_clicks = rows.iter().map(|r| r.query.clicks).sum();
        let total_impressions = rows.iter().map(|r| r.query.impressions).sum();
        let average_ctr = if total_queries == 0 {
            0.0
        } else {
            rows.iter().map(|r| r.query.ctr).sum::<f64>() / total_queries as f64
        };
        Self { total_queries, total_clicks, total_impressions, average_ctr }
    }

    pub fn cards(&self) -> [SummaryCard; 4] {
        [
            SummaryCard { label: "Total Queries", value: self.total_queries.to_string() },
            SummaryCard { label: "Total Clicks", value: format_number(self.total_clicks) },
            SummaryCard { label: "Total Impressions", value: format_number(self.total_impressions) },
            SummaryCard { label: "Avg CTR", value: format!("{}%", format_average_ctr(self.average_ctr)) },
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

impl std::fmt::Display for SummaryCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// en-US digit grouping: `12500` -> `12,500`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_ctr(ctr: f64) -> String {
    format!("{:.1}%", ctr)
}

pub fn format_position(position: f64) -> String {
    format!("{:.1}", position)
}

pub fn format_average_ctr(average_ctr: f64) -> String {
    if average_ctr.is_finite() { format!("{:.1}", average_ctr) } else { "0.0".to_string() }
}
