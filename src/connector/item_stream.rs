use super::{rest::flag, JsonObject, RestClient};
use crate::error::ConnectorError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

const PATH_PREFIX: &str = "ais";

/// An entry appended to a stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEntry {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// The position of the entry in its stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,

    pub entry_object: JsonObject,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// An auditable stream of entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStream {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,

    /// Every how many entries the stream is made immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immutable_interval: Option<u32>,

    /// The first entries of the stream, only present when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<StreamEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// A page of json-ld list items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList<T> {
    pub item_list_element: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_item: Option<String>,
}

/// The options for getting a stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetStreamOptions {
    /// Verify the stream's entries against the ledger.
    pub verify_stream: bool,

    pub include_entries: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StreamBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation_object: Option<&'a JsonObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    immutable_interval: Option<u32>,
}

/// Records entries in auditable streams.
#[async_trait]
pub trait ItemStreamConnector: Send + Sync {
    /// Create a stream, returning its id.
    async fn create(
        &self,
        annotation_object: Option<&JsonObject>,
        immutable_interval: Option<u32>,
    ) -> Result<String, ConnectorError>;

    async fn update(&self, id: &str, annotation_object: Option<&JsonObject>) -> Result<(), ConnectorError>;

    async fn get(&self, id: &str, options: &GetStreamOptions) -> Result<ItemStream, ConnectorError>;

    async fn remove(&self, id: &str) -> Result<(), ConnectorError>;

    /// Query a page of streams.
    async fn query(&self, cursor: Option<&str>) -> Result<ItemList<ItemStream>, ConnectorError>;

    /// Append an entry to a stream, returning the entry id.
    async fn create_entry(&self, id: &str, entry_object: &JsonObject) -> Result<String, ConnectorError>;

    async fn update_entry(&self, id: &str, entry_id: &str, entry_object: &JsonObject) -> Result<(), ConnectorError>;

    async fn get_entry(&self, id: &str, entry_id: &str) -> Result<StreamEntry, ConnectorError>;

    async fn remove_entry(&self, id: &str, entry_id: &str) -> Result<(), ConnectorError>;

    /// Get a page of a stream's entries.
    async fn get_entries(
        &self,
        id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<ItemList<StreamEntry>, ConnectorError>;
}

/// An auditable item stream service served over REST.
#[derive(Clone, Debug)]
pub struct RestItemStreamClient {
    rest: RestClient,
}

impl RestItemStreamClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    fn get_url(&self, id: &str, options: &GetStreamOptions) -> Result<Url, ConnectorError> {
        self.rest.route_with_query(
            &[id],
            &[("verifyStream", flag(options.verify_stream)), ("includeEntries", flag(options.include_entries))],
        )
    }
}

#[async_trait]
impl ItemStreamConnector for RestItemStreamClient {
    async fn create(
        &self,
        annotation_object: Option<&JsonObject>,
        immutable_interval: Option<u32>,
    ) -> Result<String, ConnectorError> {
        let body = StreamBody { annotation_object, immutable_interval };
        self.rest.post_for_location(self.rest.route(&[])?, &body).await
    }

    async fn update(&self, id: &str, annotation_object: Option<&JsonObject>) -> Result<(), ConnectorError> {
        let body = StreamBody { annotation_object, immutable_interval: None };
        self.rest.put(self.rest.route(&[id])?, &body).await
    }

    async fn get(&self, id: &str, options: &GetStreamOptions) -> Result<ItemStream, ConnectorError> {
        self.rest.get_json(self.get_url(id, options)?).await
    }

    async fn remove(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id])?).await
    }

    async fn query(&self, cursor: Option<&str>) -> Result<ItemList<ItemStream>, ConnectorError> {
        let url = self.rest.route_with_query(&[], &[("cursor", cursor.map(String::from))])?;
        self.rest.get_json(url).await
    }

    async fn create_entry(&self, id: &str, entry_object: &JsonObject) -> Result<String, ConnectorError> {
        let body = json!({ "entryObject": entry_object });
        self.rest.post_for_location(self.rest.route(&[id])?, &body).await
    }

    async fn update_entry(&self, id: &str, entry_id: &str, entry_object: &JsonObject) -> Result<(), ConnectorError> {
        let body = json!({ "entryObject": entry_object });
        self.rest.put(self.rest.route(&[id, entry_id])?, &body).await
    }

    async fn get_entry(&self, id: &str, entry_id: &str) -> Result<StreamEntry, ConnectorError> {
        self.rest.get_json(self.rest.route(&[id, entry_id])?).await
    }

    async fn remove_entry(&self, id: &str, entry_id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id, entry_id])?).await
    }

    async fn get_entries(
        &self,
        id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<ItemList<StreamEntry>, ConnectorError> {
        let url = self.rest.route_with_query(
            &[id, "entries"],
            &[("cursor", cursor.map(String::from)), ("pageSize", page_size.map(|s| s.to_string()))],
        )?;
        self.rest.get_json(url).await
    }
}
