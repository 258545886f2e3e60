use std::sync::{Arc, Mutex};

use crate::domain::LogRecord;
use crate::services::session::DashboardSession;

/// Shared handler state. The mutex serializes criteria mutations and page
/// navigation, so each recomputation sees a consistent snapshot and no two
/// pipeline runs interleave.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<DashboardSession>>,
}

impl AppState {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self {
            session: Arc::new(Mutex::new(DashboardSession::new(records))),
        }
    }
}
