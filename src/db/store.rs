use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Place, User},
};

/// Read access to the user and place snapshots the recommendation pipeline needs
///
/// Users come back with favorites and interactions referencing places by id only.
/// Interactions whose place no longer exists report `place_id: None`. Failing to
/// reach the backing store is `AppError::DataStoreUnavailable`; an unknown user is
/// `Ok(None)`, never an error. No retries happen at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DataStore: Send + Sync {
    /// Fetch a single user snapshot
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Full place catalog snapshot
    async fn list_places(&self) -> AppResult<Vec<Place>>;

    /// Full user population snapshot
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}
