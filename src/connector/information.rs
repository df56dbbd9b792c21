use super::RestClient;
use crate::error::ConnectorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

/// The name and version of the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// The health of the server or one of its components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Warning,
    Error,
}

/// The health of a single server component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The overall health of the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerHealth {
    pub status: HealthStatus,

    #[serde(default)]
    pub components: Vec<ComponentHealth>,
}

/// Describes the server.
#[async_trait]
pub trait InformationConnector: Send + Sync {
    async fn info(&self) -> Result<ServerInfo, ConnectorError>;

    async fn health(&self) -> Result<ServerHealth, ConnectorError>;
}

/// The server information served over REST.
#[derive(Clone, Debug)]
pub struct RestInformationClient {
    rest: RestClient,
}

impl RestInformationClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, None))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl InformationConnector for RestInformationClient {
    async fn info(&self) -> Result<ServerInfo, ConnectorError> {
        self.rest.get_json(self.rest.route(&["info"])?).await
    }

    async fn health(&self) -> Result<ServerHealth, ConnectorError> {
        self.rest.get_json(self.rest.route(&["health"])?).await
    }
}
