use chrono::Utc;
use std::collections::BTreeSet;

use crate::domain::{DashboardQuery, DayBucket, FilterCriteria, LogRecord, Metrics};
use crate::services::analytics::{self, LogPage};

pub const PAGE_SIZE: usize = 50;

/// The one stateful component: owns the immutable record snapshot, the
/// active criteria and the page state, and sequences recomputation.
///
/// Criteria mutations rerun filter/aggregate/bucketize and reset the page to
/// 1 in the same step; page navigation only reruns the paginate step against
/// the cached filtered set.
pub struct DashboardSession {
    records: Vec<LogRecord>,
    interfaces: Vec<String>,
    criteria: FilterCriteria,
    current_page: usize,
    // Indices into `records`, so recomputation never copies record data.
    filtered: Vec<u32>,
    metrics: Metrics,
    trend: Vec<DayBucket>,
}

impl DashboardSession {
    pub fn new(mut records: Vec<LogRecord>) -> Self {
        // The source makes no ordering guarantee; establish newest-first
        // once, before any pipeline use.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        // Interface catalog comes from the full snapshot and stays fixed
        // regardless of the active filter.
        let interfaces: Vec<String> = records
            .iter()
            .map(|r| r.interface_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut session = Self {
            records,
            interfaces,
            criteria: FilterCriteria::default(),
            current_page: 1,
            filtered: Vec::new(),
            metrics: Metrics::default(),
            trend: Vec::new(),
        };
        session.recompute();
        session
    }

    /// Applies one request from the presentation boundary. A criteria change
    /// always lands on page 1; with unchanged criteria the query's page is a
    /// plain navigation command.
    pub fn apply(&mut self, query: &DashboardQuery) {
        let criteria = FilterCriteria::from_query(query);
        if criteria != self.criteria {
            self.set_criteria(criteria);
        } else {
            self.set_page(query.page);
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.current_page = 1;
        self.recompute();
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn page(&self) -> LogPage<'_> {
        let refs: Vec<&LogRecord> = self
            .filtered
            .iter()
            .map(|&i| &self.records[i as usize])
            .collect();
        analytics::paginate(&refs, self.current_page, PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        (self.filtered.len() as f64 / PAGE_SIZE as f64).ceil() as usize
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn trend(&self) -> &[DayBucket] {
        &self.trend
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    fn recompute(&mut self) {
        let now = Utc::now();
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| analytics::matches(record, &self.criteria, now))
            .map(|(i, _)| i as u32)
            .collect();

        let refs: Vec<&LogRecord> = self
            .filtered
            .iter()
            .map(|&i| &self.records[i as usize])
            .collect();
        self.metrics = analytics::aggregate(&refs);
        self.trend = analytics::bucketize(&refs);
    }
}
