use super::reshape;
use crate::{
    connector::{
        JsonObject, MetricType, MetricValueChange, MetricValues, MetricWithValue, TelemetryConnector, TelemetryMetric,
        ValuesQuery,
    },
    error::StoreResult,
    pager::Page,
};
use std::sync::Arc;

/// Defines metrics and records their values.
#[derive(Clone)]
pub struct TelemetryStore {
    connector: Arc<dyn TelemetryConnector>,
}

impl TelemetryStore {
    pub fn new(connector: Arc<dyn TelemetryConnector>) -> Self {
        Self { connector }
    }

    pub async fn create_metric(&self, metric: &TelemetryMetric) -> StoreResult<()> {
        reshape("metric create", self.connector.create_metric(metric).await)
    }

    pub async fn update_metric(&self, metric: &TelemetryMetric) -> StoreResult<()> {
        reshape("metric update", self.connector.update_metric(metric).await)
    }

    /// Get a metric along with its latest value.
    pub async fn get_metric(&self, id: &str) -> StoreResult<MetricWithValue> {
        reshape("metric get", self.connector.get_metric(id).await)
    }

    pub async fn remove_metric(&self, id: &str) -> StoreResult<()> {
        reshape("metric remove", self.connector.remove_metric(id).await)
    }

    pub async fn query(
        &self,
        metric_type: Option<MetricType>,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> StoreResult<Page<TelemetryMetric>> {
        reshape("metric query", self.connector.query(metric_type, cursor, page_size).await)
    }

    pub async fn add_value(
        &self,
        id: &str,
        change: MetricValueChange,
        custom_data: Option<&JsonObject>,
    ) -> StoreResult<()> {
        reshape("metric add value", self.connector.add_value(id, change, custom_data).await)
    }

    pub async fn query_values(&self, id: &str, query: &ValuesQuery) -> StoreResult<MetricValues> {
        reshape("metric values query", self.connector.query_values(id, query).await)
    }
}
