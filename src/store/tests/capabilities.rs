use super::not_found;
use crate::{
    connector::{
        AttestationConnector, AttestationInformation, JsonObject, LogEntry, LogLevel, LogQuery, LoggingConnector,
        MetricType, MetricValueChange, MetricValues, MetricWithValue, NftConnector, NftInformation, NftMint,
        NftTransfer, TelemetryConnector, TelemetryMetric, ValuesQuery,
    },
    error::{ConnectorError, StoreError},
    pager::Page,
    store::{AttestationStore, LoggingStore, NftStore, TelemetryStore},
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

// Records the calls it receives and refuses every transfer.
#[derive(Default)]
struct FakeAttestations {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl AttestationConnector for FakeAttestations {
    async fn create(&self, attestation_object: &JsonObject) -> Result<String, ConnectorError> {
        self.calls.lock().unwrap().push(format!("create {}", attestation_object.len()));
        Ok("attestation:nft:abc".into())
    }

    async fn get(&self, id: &str) -> Result<AttestationInformation, ConnectorError> {
        Err(not_found(id))
    }

    async fn transfer(&self, id: &str, holder_identity: &str, _holder_address: &str) -> Result<(), ConnectorError> {
        self.calls.lock().unwrap().push(format!("transfer {id} {holder_identity}"));
        Err(ConnectorError::Rejected("holder has no address".into()))
    }

    async fn destroy(&self, id: &str) -> Result<(), ConnectorError> {
        self.calls.lock().unwrap().push(format!("destroy {id}"));
        Ok(())
    }
}

#[tokio::test]
async fn attestation_calls_are_forwarded() {
    let connector = Arc::new(FakeAttestations::default());
    let store = AttestationStore::new(connector.clone());

    let object = json!({ "@context": "https://schema.org", "type": "Note" });
    let object = object.as_object().cloned().expect("not an object");
    assert_eq!(store.create(&object).await, Ok("attestation:nft:abc".into()));
    store.destroy("attestation:nft:abc").await.expect("destroy failed");
    let err = store.transfer("attestation:nft:abc", "did:iota:x", "0x1").await.expect_err("transfer succeeded");

    assert_eq!(err.error, "holder has no address");
    assert_eq!(
        *connector.calls.lock().unwrap(),
        ["create 2", "destroy attestation:nft:abc", "transfer attestation:nft:abc did:iota:x"]
    );
}

#[tokio::test]
async fn missing_attestation() {
    let store = AttestationStore::new(Arc::new(FakeAttestations::default()));
    let err = store.get("attestation:nft:nope").await.expect_err("get succeeded");
    assert_eq!(err, StoreError { error: "server responded with status 404: attestation:nft:nope not found".into() });
}

// Fails every call.
struct UnavailableNft;

#[async_trait]
impl NftConnector for UnavailableNft {
    async fn mint(&self, _request: &NftMint) -> Result<String, ConnectorError> {
        Err(ConnectorError::Url(url::ParseError::EmptyHost))
    }

    async fn resolve(&self, id: &str) -> Result<NftInformation, ConnectorError> {
        Err(not_found(id))
    }

    async fn burn(&self, _id: &str) -> Result<(), ConnectorError> {
        Err(ConnectorError::Status { status: 503, message: "ledger unavailable".into() })
    }

    async fn transfer(&self, _id: &str, _request: &NftTransfer) -> Result<(), ConnectorError> {
        Err(ConnectorError::MissingLocation)
    }
}

#[tokio::test]
async fn nft_failures_are_reshaped() {
    let store = NftStore::new(Arc::new(UnavailableNft));
    let request = NftMint { tag: "playground".into(), ..Default::default() };

    let err = store.mint(&request).await.expect_err("mint succeeded");
    assert_eq!(err.error, "invalid endpoint url\nempty host");
    let err = store.burn("nft:x").await.expect_err("burn succeeded");
    assert_eq!(err.error, "server responded with status 503: ledger unavailable");
    let transfer = NftTransfer { recipient_identity: "did:a".into(), recipient_address: "0x2".into(), metadata: None };
    store.transfer("nft:x", &transfer).await.expect_err("transfer succeeded");
}

// Keeps a single metric and sums its values.
#[derive(Default)]
struct FakeTelemetry {
    metric: Mutex<Option<TelemetryMetric>>,
    total: Mutex<f64>,
}

#[async_trait]
impl TelemetryConnector for FakeTelemetry {
    async fn create_metric(&self, metric: &TelemetryMetric) -> Result<(), ConnectorError> {
        *self.metric.lock().unwrap() = Some(metric.clone());
        Ok(())
    }

    async fn update_metric(&self, metric: &TelemetryMetric) -> Result<(), ConnectorError> {
        self.create_metric(metric).await
    }

    async fn get_metric(&self, id: &str) -> Result<MetricWithValue, ConnectorError> {
        let metric = self.metric.lock().unwrap().clone().ok_or_else(|| not_found(id))?;
        Ok(MetricWithValue { metric, value: None })
    }

    async fn remove_metric(&self, _id: &str) -> Result<(), ConnectorError> {
        *self.metric.lock().unwrap() = None;
        Ok(())
    }

    async fn query(
        &self,
        metric_type: Option<MetricType>,
        _cursor: Option<&str>,
        _page_size: Option<u32>,
    ) -> Result<Page<TelemetryMetric>, ConnectorError> {
        let metric = self.metric.lock().unwrap().clone();
        let items = metric.into_iter().filter(|m| metric_type.map_or(true, |t| t == m.metric_type)).collect();
        Ok(Page::new(items, None))
    }

    async fn add_value(
        &self,
        _id: &str,
        change: MetricValueChange,
        _custom_data: Option<&JsonObject>,
    ) -> Result<(), ConnectorError> {
        let mut total = self.total.lock().unwrap();
        match change {
            MetricValueChange::Value(value) => *total = value,
            MetricValueChange::Inc => *total += 1.0,
            MetricValueChange::Dec => *total -= 1.0,
        }
        Ok(())
    }

    async fn query_values(&self, id: &str, _query: &ValuesQuery) -> Result<MetricValues, ConnectorError> {
        let MetricWithValue { metric, .. } = self.get_metric(id).await?;
        Ok(MetricValues { metric, entities: Vec::new(), cursor: None })
    }
}

#[tokio::test]
async fn telemetry_metric_lifecycle() {
    let connector = Arc::new(FakeTelemetry::default());
    let store = TelemetryStore::new(connector.clone());
    let metric = TelemetryMetric {
        id: "visits".into(),
        label: "Visits".into(),
        metric_type: MetricType::Counter,
        description: None,
        unit: None,
    };

    store.create_metric(&metric).await.expect("create failed");
    assert_eq!(store.get_metric("visits").await.map(|m| m.metric), Ok(metric.clone()));
    assert_eq!(store.query(Some(MetricType::Counter), None, None).await.map(|p| p.items.len()), Ok(1));
    assert_eq!(store.query(Some(MetricType::Gauge), None, None).await.map(|p| p.items.len()), Ok(0));

    store.add_value("visits", MetricValueChange::Value(3.0), None).await.expect("add failed");
    store.add_value("visits", MetricValueChange::Inc, None).await.expect("add failed");
    assert_eq!(*connector.total.lock().unwrap(), 4.0);

    store.remove_metric("visits").await.expect("remove failed");
    let err = store.query_values("visits", &ValuesQuery::default()).await.expect_err("query succeeded");
    assert_eq!(err.error, "server responded with status 404: visits not found");
}

// Serves a fixed log, filtered by level only.
struct FakeLog;

#[async_trait]
impl LoggingConnector for FakeLog {
    async fn query(&self, query: &LogQuery) -> Result<Page<LogEntry>, ConnectorError> {
        let levels = [LogLevel::Info, LogLevel::Error, LogLevel::Error];
        let entries = levels.into_iter().enumerate().map(|(i, level)| LogEntry {
            level,
            source: "engine".into(),
            ts: i as i64,
            message: format!("entry {i}"),
            error: None,
            data: None,
        });
        let entries = entries.filter(|e| query.level.map_or(true, |l| l == e.level)).collect();
        Ok(Page::new(entries, query.cursor.clone()))
    }
}

#[tokio::test]
async fn log_query() {
    let store = LoggingStore::new(Arc::new(FakeLog));
    let query = LogQuery { level: Some(LogLevel::Error), cursor: Some("c1".into()), ..Default::default() };
    let page = store.query(&query).await.expect("query failed");
    assert_eq!(page.items.iter().map(|e| e.ts).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(page.cursor.as_deref(), Some("c1"));
}
