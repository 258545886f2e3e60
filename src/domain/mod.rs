use chrono::{DateTime, NaiveDate, Utc};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub mod source;

/// One logged integration-execution event. Records are created once by the
/// log source and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub id: u64,
    #[serde(rename = "interfaceName")]
    pub interface_name: String,
    #[serde(rename = "integrationKey")]
    pub integration_key: String,
    pub status: ExecutionStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
    #[serde(rename = "recordsProcessed")]
    pub records_processed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Success,
    Failed,
    Warning,
    Pending,
}

impl ExecutionStatus {
    /// Parses the wire form ("SUCCESS", "failed", ...). Anything else,
    /// including "all", means no status filter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "SUCCESS" => Some(Self::Success),
            "FAILED" => Some(Self::Failed),
            "WARNING" => Some(Self::Warning),
            "PENDING" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// Active lookback window. Custom carries its own bounds and only takes
/// effect when both are present; an incomplete custom range disables time
/// filtering entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeRange {
    LastHour,
    Last24Hours,
    Last7Days,
    Last30Days,
    Custom {
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
}

/// The current combination of filters defining the active view.
///
/// `search` is stored lowercased so the per-record match stays a plain
/// substring test. Absent fields are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub time_range: TimeRange,
    pub search: Option<String>,
    pub status: Option<ExecutionStatus>,
    pub interface: Option<String>,
    pub duration_min: Option<u64>,
    pub duration_max: Option<u64>,
    pub records_min: Option<u64>,
    pub records_max: Option<u64>,
    pub key_pattern: Option<Pattern>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            time_range: TimeRange::Last24Hours,
            search: None,
            status: None,
            interface: None,
            duration_min: None,
            duration_max: None,
            records_min: None,
            records_max: None,
            key_pattern: None,
        }
    }
}

impl FilterCriteria {
    pub fn from_query(query: &DashboardQuery) -> Self {
        let time_range = match query.range.as_str() {
            "1h" => TimeRange::LastHour,
            "7d" => TimeRange::Last7Days,
            "30d" => TimeRange::Last30Days,
            "custom" => TimeRange::Custom {
                start: query.start.as_deref().and_then(parse_custom_bound),
                end: query.end.as_deref().and_then(parse_custom_bound),
            },
            _ => TimeRange::Last24Hours,
        };

        let search = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let interface = query
            .interface
            .clone()
            .filter(|s| !s.is_empty() && s != "all");

        // A pattern that fails to compile is dropped, same policy as a
        // malformed custom date.
        let key_pattern = query
            .key_pattern
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|p| Pattern::new(p).ok());

        Self {
            time_range,
            search,
            status: query.status.as_deref().and_then(ExecutionStatus::parse),
            interface,
            duration_min: query.duration_min,
            duration_max: query.duration_max,
            records_min: query.records_min,
            records_max: query.records_max,
            key_pattern,
        }
    }
}

/// Parses a custom range bound. Accepts RFC 3339 or a bare date, taken as
/// midnight UTC. Malformed input counts as an absent bound, never an error.
pub fn parse_custom_bound(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Summary counts over the filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub warning: usize,
    pub pending: usize,
    #[serde(rename = "successRate")]
    pub success_rate: f64,
}

/// Per-status counts for one UTC calendar day. Field names serialize to the
/// status keys the trend chart consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: String,
    #[serde(rename = "SUCCESS")]
    pub success: usize,
    #[serde(rename = "FAILED")]
    pub failed: usize,
    #[serde(rename = "WARNING")]
    pub warning: usize,
    #[serde(rename = "PENDING")]
    pub pending: usize,
}

impl DayBucket {
    pub fn new(date: String) -> Self {
        Self {
            date,
            success: 0,
            failed: 0,
            warning: 0,
            pending: 0,
        }
    }

    pub fn tally(&mut self, status: ExecutionStatus) {
        match status {
            ExecutionStatus::Success => self.success += 1,
            ExecutionStatus::Failed => self.failed += 1,
            ExecutionStatus::Warning => self.warning += 1,
            ExecutionStatus::Pending => self.pending += 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub data: Vec<LogRecord>,
    pub meta: PageMeta,
    pub metrics: Metrics,
    pub trend: Vec<DayBucket>,
}

/// Query parameters the presentation boundary submits per request.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default = "default_range")]
    pub range: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub q: Option<String>,
    pub status: Option<String>,
    pub interface: Option<String>,
    pub duration_min: Option<u64>,
    pub duration_max: Option<u64>,
    pub records_min: Option<u64>,
    pub records_max: Option<u64>,
    pub key_pattern: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            range: default_range(),
            start: None,
            end: None,
            q: None,
            status: None,
            interface: None,
            duration_min: None,
            duration_max: None,
            records_min: None,
            records_max: None,
            key_pattern: None,
            page: default_page(),
        }
    }
}

fn default_range() -> String {
    "24h".to_string()
}

fn default_page() -> usize {
    1
}
