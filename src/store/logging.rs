use super::reshape;
use crate::{
    connector::{LogEntry, LogQuery, LoggingConnector},
    error::StoreResult,
    pager::Page,
};
use std::sync::Arc;

/// Reads the server's log.
#[derive(Clone)]
pub struct LoggingStore {
    connector: Arc<dyn LoggingConnector>,
}

impl LoggingStore {
    pub fn new(connector: Arc<dyn LoggingConnector>) -> Self {
        Self { connector }
    }

    pub async fn query(&self, query: &LogQuery) -> StoreResult<Page<LogEntry>> {
        reshape("logging query", self.connector.query(query).await)
    }
}
