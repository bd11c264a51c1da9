//! Place recommendation pipeline
//!
//! Each source scores the catalog independently against a read-only request
//! context; the combiner merges the scored lists into one ranking. All scoring is
//! synchronous and runs once the store snapshots have been fetched.

use std::time::Instant;
use uuid::Uuid;

use crate::{
    db::DataStore,
    error::{AppError, AppResult},
    models::{Place, RecommendationRequest, User},
};

pub mod behavior;
pub mod collaborative;
pub mod combiner;
pub mod context;
pub mod contextual;
pub mod favorites;
pub mod graph;
pub mod similarity;
pub mod trending;
pub mod vector;

pub use behavior::{analyze_behavior, BehaviorProfile};
pub use collaborative::CollaborativeRecommender;
pub use combiner::combine;
pub use context::{PlaceCatalog, RecommendationContext, ScoredPlace};
pub use contextual::ContextualRecommender;
pub use graph::GraphRecommender;
pub use similarity::user_similarity;
pub use trending::TrendingRecommender;
pub use vector::InteractionVector;

/// A producer of scored candidate places
///
/// Implementations must only return places taken from `ctx.catalog`.
pub trait RecommendationSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &'static str;

    fn recommend<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<ScoredPlace<'a>>;
}

/// Ordered set of sources whose outputs are combined into one ranking
pub struct RecommendationPipeline {
    sources: Vec<Box<dyn RecommendationSource>>,
}

impl Default for RecommendationPipeline {
    /// Collaborative, contextual, trending and graph sources, in that order
    fn default() -> Self {
        Self::new(vec![
            Box::new(CollaborativeRecommender),
            Box::new(ContextualRecommender),
            Box::new(TrendingRecommender),
            Box::new(GraphRecommender),
        ])
    }
}

impl RecommendationPipeline {
    pub fn new(sources: Vec<Box<dyn RecommendationSource>>) -> Self {
        Self { sources }
    }

    /// Runs every source and returns the combined ranking with scores
    pub fn rank<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<ScoredPlace<'a>> {
        let lists = self.sources.iter().map(|source| {
            let scored = source.recommend(ctx);
            tracing::debug!(
                user_id = %ctx.user.id,
                source = source.name(),
                candidates = scored.len(),
                "Source scored"
            );
            scored
        });
        combine(lists)
    }
}

async fn fetch_user(store: &dyn DataStore, user_id: Uuid) -> AppResult<User> {
    store
        .get_user(user_id)
        .await?
        .ok_or(AppError::UserNotFound(user_id))
}

/// Context-aware recommendations for one traveler, best first
///
/// Fetches the target user, the place catalog and the user population, then runs
/// the default pipeline. An empty result is a valid answer.
pub async fn get_recommendations(
    store: &dyn DataStore,
    request: &RecommendationRequest,
) -> AppResult<Vec<Place>> {
    let start = Instant::now();

    let user = fetch_user(store, request.user_id).await?;
    let places = store.list_places().await?;
    let population = store.list_users().await?;

    tracing::info!(
        user_id = %user.id,
        places = places.len(),
        users = population.len(),
        location = ?request.location,
        time_of_day = ?request.time_of_day,
        "Generating recommendations"
    );

    let ctx = RecommendationContext::new(&user, &places, &population)
        .with_location(request.location.as_deref())
        .with_time_of_day(request.time_of_day.as_deref());

    let ranked: Vec<Place> = RecommendationPipeline::default()
        .rank(&ctx)
        .into_iter()
        .map(|scored| scored.place.clone())
        .collect();

    tracing::info!(
        user_id = %user.id,
        recommended = ranked.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Recommendations generated"
    );

    Ok(ranked)
}

/// Favorites-based recommendations for one traveler
pub async fn get_favorite_recommendations(
    store: &dyn DataStore,
    user_id: Uuid,
) -> AppResult<Vec<Place>> {
    let user = fetch_user(store, user_id).await?;
    let places = store.list_places().await?;
    let population = store.list_users().await?;

    let catalog = PlaceCatalog::new(&places);
    let recommended: Vec<Place> = favorites::favorites_based(&user, &catalog, &population)
        .into_iter()
        .cloned()
        .collect();

    tracing::info!(
        user_id = %user.id,
        recommended = recommended.len(),
        "Favorite-based recommendations generated"
    );

    Ok(recommended)
}
