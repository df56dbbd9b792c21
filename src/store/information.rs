use super::reshape;
use crate::{
    connector::{ComponentHealth, HealthStatus, InformationConnector, ServerHealth, ServerInfo},
    error::StoreResult,
};
use std::sync::Arc;

/// What the UI knows about the server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerStatus {
    pub name: String,
    pub version: String,

    /// `None` until the health was checked for the first time.
    pub health: Option<HealthStatus>,

    pub components: Vec<ComponentHealth>,
}

/// Describes the server the playground talks to.
#[derive(Clone)]
pub struct InformationStore {
    connector: Arc<dyn InformationConnector>,
}

impl InformationStore {
    pub fn new(connector: Arc<dyn InformationConnector>) -> Self {
        Self { connector }
    }

    pub async fn info(&self) -> StoreResult<ServerInfo> {
        reshape("server info", self.connector.info().await)
    }

    pub async fn health(&self) -> StoreResult<ServerHealth> {
        reshape("server health", self.connector.health().await)
    }

    /// Refresh the server status.
    ///
    /// The name and version are only fetched while they are unknown. Failures never surface: an unreachable
    /// server is reported as [`HealthStatus::Error`] and a failed info fetch leaves the name and version as
    /// they were.
    pub async fn refresh(&self, status: &mut ServerStatus) {
        let health = match self.health().await {
            Ok(health) => health,
            Err(_) => {
                status.health = Some(HealthStatus::Error);
                return;
            }
        };
        status.health = Some(health.status);
        status.components = health.components;

        let unknown_version = health.status != HealthStatus::Error && status.version.is_empty();
        if unknown_version || status.name.is_empty() {
            if let Ok(info) = self.info().await {
                status.name = info.name;
                status.version = info.version;
            }
        }
    }
}
