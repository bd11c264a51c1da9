use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::DataStore;
use crate::{
    error::AppResult,
    models::{Place, User},
};

/// In-memory data store for tests and local runs
///
/// Insertion order is preserved for both catalogs so snapshots are deterministic.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<InMemoryStoreInner>>,
}

#[derive(Default)]
struct InMemoryStoreInner {
    places: Vec<Place>,
    users: Vec<User>,
    place_index: HashMap<Uuid, usize>,
    user_index: HashMap<Uuid, usize>,
}

impl InMemoryStoreInner {
    /// Mirrors a left join on places: dangling interaction references become `None`
    fn resolve(&self, user: &User) -> User {
        let mut resolved = user.clone();
        for interaction in &mut resolved.interaction_history {
            if let Some(place_id) = interaction.place_id {
                if !self.place_index.contains_key(&place_id) {
                    interaction.place_id = None;
                }
            }
        }
        resolved
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given snapshots
    pub async fn with_data(places: Vec<Place>, users: Vec<User>) -> Self {
        let store = Self::new();
        for place in places {
            store.upsert_place(place).await;
        }
        for user in users {
            store.upsert_user(user).await;
        }
        store
    }

    pub async fn upsert_place(&self, place: Place) {
        let mut inner = self.inner.write().await;
        let existing = inner.place_index.get(&place.id).copied();
        match existing {
            Some(position) => inner.places[position] = place,
            None => {
                let position = inner.places.len();
                inner.place_index.insert(place.id, position);
                inner.places.push(place);
            }
        }
    }

    pub async fn upsert_user(&self, user: User) {
        let mut inner = self.inner.write().await;
        let existing = inner.user_index.get(&user.id).copied();
        match existing {
            Some(position) => inner.users[position] = user,
            None => {
                let position = inner.users.len();
                inner.user_index.insert(user.id, position);
                inner.users.push(user);
            }
        }
    }
}

#[async_trait::async_trait]
impl DataStore for InMemoryStore {
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .user_index
            .get(&id)
            .map(|&position| inner.resolve(&inner.users[position])))
    }

    async fn list_places(&self) -> AppResult<Vec<Place>> {
        Ok(self.inner.read().await.places.clone())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().map(|u| inner.resolve(u)).collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
