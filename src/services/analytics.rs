use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use crate::domain::{
    DayBucket, ExecutionStatus, FilterCriteria, LogRecord, Metrics, TimeRange,
};

/// Tests one record against every active predicate. Predicates are
/// independent and ANDed; absent criteria fields always pass.
pub fn matches(record: &LogRecord, criteria: &FilterCriteria, now: DateTime<Utc>) -> bool {
    in_time_window(record, &criteria.time_range, now)
        && matches_search(record, criteria.search.as_deref())
        && criteria.status.map_or(true, |s| record.status == s)
        && criteria
            .interface
            .as_deref()
            .map_or(true, |name| record.interface_name == name)
        && within(record.duration_ms, criteria.duration_min, criteria.duration_max)
        && within(record.records_processed, criteria.records_min, criteria.records_max)
        && criteria
            .key_pattern
            .as_ref()
            .map_or(true, |p| p.matches(&record.integration_key))
}

fn in_time_window(record: &LogRecord, range: &TimeRange, now: DateTime<Utc>) -> bool {
    let cutoff = match range {
        TimeRange::Custom { start, end } => {
            return match (start, end) {
                // An inverted range (start > end) empties the result here
                // because no timestamp can satisfy both comparisons.
                (Some(start), Some(end)) => {
                    record.timestamp >= *start && record.timestamp <= *end
                }
                // Incomplete custom range: time filtering is disabled.
                _ => true,
            };
        }
        TimeRange::LastHour => now - Duration::hours(1),
        TimeRange::Last24Hours => now - Duration::hours(24),
        TimeRange::Last7Days => now - Duration::days(7),
        TimeRange::Last30Days => now - Duration::days(30),
    };
    record.timestamp >= cutoff
}

fn matches_search(record: &LogRecord, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(q) => {
            record.interface_name.to_lowercase().contains(q)
                || record.integration_key.to_lowercase().contains(q)
                || record.message.to_lowercase().contains(q)
        }
    }
}

fn within(value: u64, min: Option<u64>, max: Option<u64>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

/// Returns the records matching `criteria`, preserving input order.
pub fn filter<'a>(
    records: &'a [LogRecord],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<&'a LogRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria, now))
        .collect()
}

/// Single pass over the filtered set counting by status. An empty set has a
/// success rate of 0, not NaN.
pub fn aggregate(records: &[&LogRecord]) -> Metrics {
    let mut metrics = Metrics::default();
    for record in records {
        metrics.total += 1;
        match record.status {
            ExecutionStatus::Success => metrics.success += 1,
            ExecutionStatus::Failed => metrics.failed += 1,
            ExecutionStatus::Warning => metrics.warning += 1,
            ExecutionStatus::Pending => metrics.pending += 1,
        }
    }
    if metrics.total > 0 {
        metrics.success_rate = round1(metrics.success as f64 / metrics.total as f64 * 100.0);
    }
    metrics
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Groups the filtered set into per-day status counts, ascending by date.
/// The bucket key is the UTC calendar date; days with no records produce no
/// bucket.
pub fn bucketize(records: &[&LogRecord]) -> Vec<DayBucket> {
    let mut days: BTreeMap<String, DayBucket> = BTreeMap::new();
    for record in records {
        let date = record.timestamp.date_naive().format("%Y-%m-%d").to_string();
        days.entry(date.clone())
            .or_insert_with(|| DayBucket::new(date))
            .tally(record.status);
    }
    days.into_values().collect()
}

#[derive(Debug)]
pub struct LogPage<'a> {
    pub items: Vec<&'a LogRecord>,
    pub total: usize,
    pub total_pages: usize,
}

/// Slices one page out of the filtered set. An out-of-range page yields an
/// empty slice rather than panicking; clamping is the caller's concern.
pub fn paginate<'a>(records: &[&'a LogRecord], page: usize, page_size: usize) -> LogPage<'a> {
    let total = records.len();
    let total_pages = (total as f64 / page_size as f64).ceil() as usize;
    let start = page.saturating_sub(1) * page_size;

    let items = if start < total {
        records[start..(start + page_size).min(total)].to_vec()
    } else {
        vec![]
    };

    LogPage {
        items,
        total,
        total_pages,
    }
}
