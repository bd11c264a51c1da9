use super::context::{RecommendationContext, ScoreBoard, ScoredPlace};
use super::similarity::hybrid_similarity;
use super::vector::InteractionVector;
use super::RecommendationSource;
use crate::models::User;

/// Users must be strictly more similar than this to contribute
pub const SIMILARITY_THRESHOLD: f64 = 0.4;
/// Share of the target's total engagement granted per contributing interaction
pub const ENGAGEMENT_FACTOR: f64 = 0.2;

/// Recommends places that similar travelers interacted with
///
/// Every qualifying neighbour contributes the same flat amount per interaction;
/// the similarity ranking only decides who qualifies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollaborativeRecommender;

impl CollaborativeRecommender {
    /// Other users above the similarity threshold, most similar first
    pub fn similar_users<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<(&'a User, f64)> {
        let target = InteractionVector::from_history(&ctx.user.interaction_history);

        let mut neighbours: Vec<(&'a User, f64)> = ctx
            .population
            .iter()
            .filter(|other| other.id != ctx.user.id)
            .map(|other| {
                let vector = InteractionVector::from_history(&other.interaction_history);
                (other, hybrid_similarity(&target, &vector))
            })
            .filter(|(_, similarity)| *similarity > SIMILARITY_THRESHOLD)
            .collect();

        neighbours.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        neighbours
    }
}

impl RecommendationSource for CollaborativeRecommender {
    fn name(&self) -> &'static str {
        "collaborative"
    }

    fn recommend<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<ScoredPlace<'a>> {
        let seen = ctx.user.interacted_places();
        let increment = ctx.behavior.total_score * ENGAGEMENT_FACTOR;
        let neighbours = self.similar_users(ctx);

        tracing::debug!(
            user_id = %ctx.user.id,
            neighbours = neighbours.len(),
            "Similar users found"
        );

        let mut board = ScoreBoard::default();
        for (neighbour, _similarity) in &neighbours {
            for place_id in neighbour.interaction_history.iter().filter_map(|i| i.place_id) {
                if !seen.contains(&place_id) {
                    board.add(place_id, increment);
                }
            }
        }

        board.resolve(&ctx.catalog)
    }
}
