use chrono::{Duration, Utc};
use rand::prelude::*;
use std::error::Error;

use crate::domain::source::LogSource;
use crate::domain::{ExecutionStatus, LogRecord};

const INTERFACES: [&str; 10] = [
    "SAP-SuccessFactors-ECP",
    "SF-Payroll-Integration",
    "Employee-Directory-Sync",
    "Benefits-Enrollment-API",
    "Time-Attendance-Connector",
    "Performance-Review-Bridge",
    "Compensation-Data-Pipeline",
    "Learning-Management-Sync",
    "Onboarding-Workflow-API",
    "Offboarding-Process-Connector",
];

const MESSAGES: [&str; 10] = [
    "Data synchronization completed successfully",
    "Connection timeout - retrying",
    "Authentication failed - check credentials",
    "Partial data sync - 45/50 records processed",
    "Rate limit exceeded - scheduled for retry",
    "Invalid data format detected",
    "Sync completed with warnings",
    "Network connectivity issues",
    "Database connection established",
    "Processing batch 1/5",
];

const STATUSES: [ExecutionStatus; 4] = [
    ExecutionStatus::Success,
    ExecutionStatus::Failed,
    ExecutionStatus::Warning,
    ExecutionStatus::Pending,
];

/// Generates execution records spread over the last 30 days, standing in for
/// the real middleware feed during development and demos.
pub struct SyntheticLogSource {
    count: usize,
}

impl SyntheticLogSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl LogSource for SyntheticLogSource {
    fn fetch_all(&self) -> Result<Vec<LogRecord>, Box<dyn Error + Send + Sync>> {
        let mut rng = rand::rng();
        let now = Utc::now();
        let mut records = Vec::with_capacity(self.count);

        for i in 0..self.count {
            let age = Duration::days(rng.random_range(0..30))
                + Duration::hours(rng.random_range(0..24))
                + Duration::minutes(rng.random_range(0..60));

            records.push(LogRecord {
                id: (i + 1) as u64,
                interface_name: INTERFACES.choose(&mut rng).unwrap().to_string(),
                integration_key: format!("INT-{:04}", rng.random_range(0..10_000)),
                status: *STATUSES.choose(&mut rng).unwrap(),
                message: MESSAGES.choose(&mut rng).unwrap().to_string(),
                timestamp: now - age,
                duration_ms: rng.random_range(100..5_100),
                records_processed: rng.random_range(0..1_000),
            });
        }

        Ok(records)
    }
}
