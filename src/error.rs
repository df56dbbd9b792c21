use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{error::Error, iter};

/// An error raised by a remote capability connector.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("request to {url} failed")]
    Request {
        url: String,

        #[source]
        source: reqwest::Error,
    },

    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body")]
    Decode(#[source] serde_json::Error),

    #[error("response has no location for the created resource")]
    MissingLocation,

    #[error("invalid endpoint url")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Rejected(String),
}

/// Render an error and every error in its source chain, outermost first.
pub fn format_errors(error: &(dyn Error + 'static)) -> Vec<String> {
    iter::successors(Some(error), |&e| e.source()).map(ToString::to_string).collect()
}

/// The result of a store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// A failed store operation, reshaped into something the UI can render as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct StoreError {
    /// The newline separated error chain.
    pub error: String,
}

impl StoreError {
    /// Construct a store error from any error, flattening its source chain.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: Error + 'static,
    {
        Self { error: format_errors(error).into_iter().join("\n") }
    }
}

impl From<ConnectorError> for StoreError {
    fn from(error: ConnectorError) -> Self {
        Self::from_error(&error)
    }
}
