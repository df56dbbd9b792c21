use super::{EntitiesPage, JsonObject, RestClient};
use crate::{error::ConnectorError, pager::Page};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;
use std::collections::BTreeMap;
use url::Url;

const PATH_PREFIX: &str = "telemetry";

/// The kind of a metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MetricType {
    /// Only ever goes up.
    Counter,

    /// Goes up and down in steps.
    IncDec,

    /// Set to arbitrary values.
    Gauge,
}

impl MetricType {
    /// Every metric type, in wire order.
    pub const ALL: [MetricType; 3] = [Self::Counter, Self::IncDec, Self::Gauge];

    /// The camel case name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::IncDec => "incDec",
            Self::Gauge => "gauge",
        }
    }

    /// The translation key for this type's label.
    pub fn label_key(&self) -> String {
        format!("pages.telemetryMetricProperties.metricTypes.{}", self.name())
    }
}

impl From<MetricType> for u8 {
    fn from(metric_type: MetricType) -> Self {
        match metric_type {
            MetricType::Counter => 0,
            MetricType::IncDec => 1,
            MetricType::Gauge => 2,
        }
    }
}

impl TryFrom<u8> for MetricType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|t| u8::from(*t) == value).ok_or_else(|| format!("unknown metric type {value}"))
    }
}

/// The labels for every metric type keyed by their wire value, translated with the given function.
pub fn metric_type_labels<F>(translate: F) -> BTreeMap<u8, String>
where
    F: Fn(&str) -> String,
{
    MetricType::ALL.into_iter().map(|t| (u8::from(t), translate(&t.label_key()))).collect()
}

/// A metric definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryMetric {
    pub id: String,
    pub label: String,

    #[serde(rename = "type")]
    pub metric_type: MetricType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A single recorded value of a metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub id: String,

    /// The timestamp of the value, in milliseconds.
    pub ts: i64,

    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<JsonObject>,
}

/// A metric along with its latest value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricWithValue {
    pub metric: TelemetryMetric,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<MetricValue>,
}

/// A page of values for a metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    pub metric: TelemetryMetric,
    pub entities: Vec<MetricValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// A change to apply to a metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricValueChange {
    /// Record this exact value.
    Value(f64),

    /// Add one to the current value.
    Inc,

    /// Subtract one from the current value.
    Dec,
}

impl Serialize for MetricValueChange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::Inc => serializer.serialize_str("inc"),
            Self::Dec => serializer.serialize_str("dec"),
        }
    }
}

/// The filters for a metric values query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValuesQuery {
    /// Only include values at or after this timestamp, in milliseconds.
    pub time_start: Option<i64>,

    /// Only include values at or before this timestamp, in milliseconds.
    pub time_end: Option<i64>,

    pub cursor: Option<String>,
    pub page_size: Option<u32>,
}

/// Records telemetry metrics.
#[async_trait]
pub trait TelemetryConnector: Send + Sync {
    async fn create_metric(&self, metric: &TelemetryMetric) -> Result<(), ConnectorError>;

    async fn update_metric(&self, metric: &TelemetryMetric) -> Result<(), ConnectorError>;

    async fn get_metric(&self, id: &str) -> Result<MetricWithValue, ConnectorError>;

    async fn remove_metric(&self, id: &str) -> Result<(), ConnectorError>;

    /// Query the metric definitions, optionally only those of one type.
    async fn query(
        &self,
        metric_type: Option<MetricType>,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<Page<TelemetryMetric>, ConnectorError>;

    async fn add_value(
        &self,
        id: &str,
        change: MetricValueChange,
        custom_data: Option<&JsonObject>,
    ) -> Result<(), ConnectorError>;

    async fn query_values(&self, id: &str, query: &ValuesQuery) -> Result<MetricValues, ConnectorError>;
}

/// A telemetry service served over REST.
#[derive(Clone, Debug)]
pub struct RestTelemetryClient {
    rest: RestClient,
}

impl RestTelemetryClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TelemetryConnector for RestTelemetryClient {
    async fn create_metric(&self, metric: &TelemetryMetric) -> Result<(), ConnectorError> {
        self.rest.post(self.rest.route(&["metric"])?, metric).await
    }

    async fn update_metric(&self, metric: &TelemetryMetric) -> Result<(), ConnectorError> {
        self.rest.put(self.rest.route(&["metric", metric.id.as_str()])?, metric).await
    }

    async fn get_metric(&self, id: &str) -> Result<MetricWithValue, ConnectorError> {
        self.rest.get_json(self.rest.route(&["metric", id])?).await
    }

    async fn remove_metric(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&["metric", id])?).await
    }

    async fn query(
        &self,
        metric_type: Option<MetricType>,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<Page<TelemetryMetric>, ConnectorError> {
        let url = self.rest.route_with_query(
            &["metric"],
            &[
                ("type", metric_type.map(|t| u8::from(t).to_string())),
                ("cursor", cursor.map(String::from)),
                ("pageSize", page_size.map(|s| s.to_string())),
            ],
        )?;
        let page: EntitiesPage<TelemetryMetric> = self.rest.get_json(url).await?;
        Ok(page.into())
    }

    async fn add_value(
        &self,
        id: &str,
        change: MetricValueChange,
        custom_data: Option<&JsonObject>,
    ) -> Result<(), ConnectorError> {
        let body = json!({ "value": change, "customData": custom_data });
        self.rest.post(self.rest.route(&["metric", id, "value"])?, &body).await
    }

    async fn query_values(&self, id: &str, query: &ValuesQuery) -> Result<MetricValues, ConnectorError> {
        let url = self.rest.route_with_query(
            &["metric", id, "value"],
            &[
                ("timeStart", query.time_start.map(|t| t.to_string())),
                ("timeEnd", query.time_end.map(|t| t.to_string())),
                ("cursor", query.cursor.clone()),
                ("pageSize", query.page_size.map(|s| s.to_string())),
            ],
        )?;
        self.rest.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::value(MetricValueChange::Value(2.5), json!(2.5))]
    #[case::inc(MetricValueChange::Inc, json!("inc"))]
    #[case::dec(MetricValueChange::Dec, json!("dec"))]
    fn value_change_wire_format(#[case] change: MetricValueChange, #[case] expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(change).expect("serialization failed"), expected);
    }

    #[test]
    fn metric_type_is_numeric() {
        let metric = json!({ "id": "m", "label": "Requests", "type": 1 });
        let metric: TelemetryMetric = serde_json::from_value(metric).expect("deserialization failed");
        assert_eq!(metric.metric_type, MetricType::IncDec);
        assert_eq!(serde_json::to_value(&metric).expect("serialization failed")["type"], json!(1));

        serde_json::from_value::<TelemetryMetric>(json!({ "id": "m", "label": "x", "type": 9 }))
            .expect_err("deserialization succeeded");
    }

    #[test]
    fn labels() {
        let labels = metric_type_labels(|key| key.rsplit('.').next().unwrap_or_default().to_uppercase());
        let expected: BTreeMap<_, _> =
            [(0, "COUNTER".to_string()), (1, "INCDEC".to_string()), (2, "GAUGE".to_string())].into_iter().collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn value_routes() {
        let client = RestTelemetryClient::new(&Url::parse("https://api.example.com").expect("invalid url"));
        let url = client.rest.route(&["metric", "cpu", "value"]).expect("route failed");
        assert_eq!(url.as_str(), "https://api.example.com/telemetry/metric/cpu/value");
    }
}
