use super::{EntitiesPage, JsonObject, RestClient};
use crate::{error::ConnectorError, pager::Page};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

const PATH_PREFIX: &str = "logging";

/// The severity of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        write!(f, "{text}")
    }
}

/// An entry in the server's log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub source: String,

    /// The timestamp of the entry, in milliseconds.
    pub ts: i64,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,
}

/// The filters for a log query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogQuery {
    pub level: Option<LogLevel>,
    pub source: Option<String>,

    /// Only include entries at or after this timestamp, in milliseconds.
    pub time_start: Option<i64>,

    /// Only include entries at or before this timestamp, in milliseconds.
    pub time_end: Option<i64>,

    pub cursor: Option<String>,
    pub page_size: Option<u32>,
}

/// Reads the server's log.
#[async_trait]
pub trait LoggingConnector: Send + Sync {
    async fn query(&self, query: &LogQuery) -> Result<Page<LogEntry>, ConnectorError>;
}

/// The server log served over REST.
#[derive(Clone, Debug)]
pub struct RestLoggingClient {
    rest: RestClient,
}

impl RestLoggingClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    fn query_url(&self, query: &LogQuery) -> Result<Url, ConnectorError> {
        self.rest.route_with_query(
            &[],
            &[
                ("level", query.level.map(|l| l.to_string())),
                ("source", query.source.clone()),
                ("timeStart", query.time_start.map(|t| t.to_string())),
                ("timeEnd", query.time_end.map(|t| t.to_string())),
                ("cursor", query.cursor.clone()),
                ("pageSize", query.page_size.map(|s| s.to_string())),
            ],
        )
    }
}

#[async_trait]
impl LoggingConnector for RestLoggingClient {
    async fn query(&self, query: &LogQuery) -> Result<Page<LogEntry>, ConnectorError> {
        let page: EntitiesPage<LogEntry> = self.rest.get_json(self.query_url(query)?).await?;
        Ok(page.into())
    }
}
