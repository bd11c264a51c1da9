use std::sync::Arc;

use uuid::Uuid;

use super::redis::{Cache, CacheKey};
use super::DataStore;
use crate::{
    error::AppResult,
    models::{Place, User},
};

/// Decorator caching the place catalog snapshot in Redis
///
/// Users are always read from the inner store: interaction histories change far
/// more often than the catalog. Redis failures fall through to the inner store.
pub struct CachedStore {
    inner: Arc<dyn DataStore>,
    cache: Cache,
    ttl: u64,
}

impl CachedStore {
    pub fn new(inner: Arc<dyn DataStore>, cache: Cache, ttl: u64) -> Self {
        Self { inner, cache, ttl }
    }
}

#[async_trait::async_trait]
impl DataStore for CachedStore {
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.inner.get_user(id).await
    }

    async fn list_places(&self) -> AppResult<Vec<Place>> {
        crate::cached!(self.cache, CacheKey::PlaceCatalog, self.ttl, self.inner.list_places())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.inner.list_users().await
    }

    fn name(&self) -> &'static str {
        "redis-cached"
    }
}
