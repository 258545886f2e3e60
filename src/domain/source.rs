use crate::domain::LogRecord;
use std::error::Error;

/// Where execution records come from. Implementations make no ordering
/// guarantee; the session establishes newest-first order on ingestion.
pub trait LogSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<LogRecord>, Box<dyn Error + Send + Sync>>;
}
