use crate::error::ConnectorError;
use reqwest::{header::LOCATION, Method, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

/// A JSON REST client bound to an endpoint and an optional path prefix.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    endpoint: Url,
    prefix: Vec<String>,
}

impl RestClient {
    /// Construct a new client with its own connection pool.
    pub fn new(endpoint: &Url, path_prefix: Option<&str>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, path_prefix)
    }

    /// Construct a new client that shares the given connection pool.
    pub fn with_client(http: reqwest::Client, endpoint: &Url, path_prefix: Option<&str>) -> Self {
        let prefix =
            path_prefix.into_iter().flat_map(|p| p.split('/')).filter(|s| !s.is_empty()).map(String::from).collect();
        Self { http, endpoint: endpoint.clone(), prefix }
    }

    /// Build the url for the given path segments under this client's prefix.
    ///
    /// Segments are percent encoded, so ids containing `/` or `:` are kept as a single segment.
    pub fn route(&self, segments: &[&str]) -> Result<Url, ConnectorError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ConnectorError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(self.prefix.iter().map(String::as_str).chain(segments.iter().copied()));
        Ok(url)
    }

    /// Build the url for the given path segments, appending every query parameter that has a value.
    pub fn route_with_query(&self, segments: &[&str], query: &[(&str, Option<String>)]) -> Result<Url, ConnectorError> {
        let mut url = self.route(segments)?;
        let present: Vec<_> = query.iter().filter_map(|(k, v)| v.as_ref().map(|v| (k, v))).collect();
        if !present.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in present {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ConnectorError> {
        let response = self.execute(Method::GET, url, None::<&()>).await?;
        read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ConnectorError> {
        let response = self.execute(Method::POST, url, Some(body)).await?;
        read_json(response).await
    }

    /// Post a body and return the id of the created resource, taken from the `location` header.
    pub(crate) async fn post_for_location<B: Serialize>(&self, url: Url, body: &B) -> Result<String, ConnectorError> {
        let response = self.execute(Method::POST, url, Some(body)).await?;
        let location = response.headers().get(LOCATION).ok_or(ConnectorError::MissingLocation)?;
        let location = location.to_str().map_err(|_| ConnectorError::MissingLocation)?;
        Ok(location.to_string())
    }

    pub(crate) async fn post<B: Serialize>(&self, url: Url, body: &B) -> Result<(), ConnectorError> {
        self.execute(Method::POST, url, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn put<B: Serialize>(&self, url: Url, body: &B) -> Result<(), ConnectorError> {
        self.execute(Method::PUT, url, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), ConnectorError> {
        self.execute(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, ConnectorError> {
        let request_url = url.to_string();
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response =
            request.send().await.map_err(|source| ConnectorError::Request { url: request_url, source })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ConnectorError::Status { status: status.as_u16(), message: error_message(&body) })
    }
}

/// A query flag, only sent when set.
pub(crate) fn flag(set: bool) -> Option<String> {
    set.then(|| "true".to_string())
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => error.message,
        Err(_) => body.trim().to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ConnectorError> {
    let url = response.url().to_string();
    let bytes = response.bytes().await.map_err(|source| ConnectorError::Request { url, source })?;
    serde_json::from_slice(&bytes).map_err(ConnectorError::Decode)
}
