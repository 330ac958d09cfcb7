/// Quiet period before a typed filter becomes active.
pub const DEBOUNCE_DELAY_MS: u32 = 300;

/// Length of the default trailing window, today included.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Server-side limit on `topQueries`.
pub const TOP_QUERIES_LIMIT: usize = 20;

/// Longest date range, in days, a single request may cover.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Artificial latency of the mock data source.
pub const MOCK_DELAY_MS: u64 = 500;

pub const API_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";
pub const AXIS_DATE_FORMAT: &str = "%b %d";
