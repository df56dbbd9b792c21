use super::{EntitiesPage, RestClient};
use crate::{error::ConnectorError, pager::Page, schema::Entity};
use async_trait::async_trait;
use std::marker::PhantomData;
use url::Url;

/// A storage for entities of a single type.
#[async_trait]
pub trait EntityStorageConnector<T: Entity>: Send + Sync {
    /// Get an entity by its primary key.
    async fn get(&self, id: &str) -> Result<T, ConnectorError>;

    /// Insert or replace an entity.
    async fn set(&self, entity: &T) -> Result<(), ConnectorError>;

    /// Remove an entity by its primary key.
    async fn remove(&self, id: &str) -> Result<(), ConnectorError>;

    /// Query a page of entities, in the schema's default sort order.
    async fn query(&self, cursor: Option<&str>, page_size: Option<u32>) -> Result<Page<T>, ConnectorError>;
}

/// An entity storage served over REST.
pub struct RestEntityStorageClient<T> {
    rest: RestClient,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> RestEntityStorageClient<T> {
    /// Construct a client for the storage served under the entity's own path prefix.
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(T::PATH_PREFIX)))
    }

    /// Construct a client on top of an existing REST client.
    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest, _entity: PhantomData }
    }
}

#[async_trait]
impl<T: Entity> EntityStorageConnector<T> for RestEntityStorageClient<T> {
    async fn get(&self, id: &str) -> Result<T, ConnectorError> {
        self.rest.get_json(self.rest.route(&[id])?).await
    }

    async fn set(&self, entity: &T) -> Result<(), ConnectorError> {
        self.rest.post(self.rest.route(&[])?, entity).await
    }

    async fn remove(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id])?).await
    }

    async fn query(&self, cursor: Option<&str>, page_size: Option<u32>) -> Result<Page<T>, ConnectorError> {
        let url = self.rest.route_with_query(
            &[],
            &[("cursor", cursor.map(String::from)), ("pageSize", page_size.map(|s| s.to_string()))],
        )?;
        let page: EntitiesPage<T> = self.rest.get_json(url).await?;
        Ok(page.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::UserNftEntry;

    #[test]
    fn bound_to_entity_prefix() {
        let endpoint = Url::parse("https://api.example.com").expect("invalid url");
        let client = RestEntityStorageClient::<UserNftEntry>::new(&endpoint);
        let url = client.rest.route(&["entry-1"]).expect("route failed");
        assert_eq!(url.as_str(), "https://api.example.com/user-nft/entry-1");
    }
}
