mod place;
mod user;

pub use place::Place;
pub use user::{BudgetRange, Interaction, InteractionType, Preferences, User};

use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for the context-aware recommendation endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
}

/// Query parameters for the favorites-based recommendation endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesRequest {
    pub user_id: Uuid,
}
