use super::context::{RecommendationContext, ScoreBoard, ScoredPlace};
use super::RecommendationSource;

/// Weight propagated along one relation edge per source interaction
pub const EDGE_WEIGHT: f64 = 0.3;

/// Propagates weight to places that point at places the user interacted with
///
/// A place P' gains weight when its `related_places` contains an interacted place P,
/// once per interaction with P.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRecommender;

impl RecommendationSource for GraphRecommender {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn recommend<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<ScoredPlace<'a>> {
        let mut board = ScoreBoard::default();

        for place_id in ctx.user.interaction_history.iter().filter_map(|i| i.place_id) {
            for related in ctx.catalog.iter().filter(|p| p.is_related_to(&place_id)) {
                board.add(related.id, EDGE_WEIGHT);
            }
        }

        board.resolve(&ctx.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InteractionType, Place, User};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_propagates_along_incoming_edges() {
        let crypt = Place::new("Crypt", "church");
        let mut seed = Place::new("Cathedral", "church");
        // outgoing edge from the seed: crypt gains nothing
        seed.relate_to(crypt.id);
        let mut chapel = Place::new("Chapel", "church");
        chapel.relate_to(seed.id);

        let mut user = User::new();
        user.record(seed.id, InteractionType::Visited);
        let places = vec![seed, chapel, crypt];

        let ctx = RecommendationContext::new(&user, &places, &[]);
        let recommended = GraphRecommender.recommend(&ctx);

        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].place.name, "Chapel");
        assert!((recommended[0].score - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_weight_is_additive_across_interactions() {
        let a = Place::new("A", "park");
        let b = Place::new("B", "park");
        let mut hub = Place::new("Hub", "park");
        hub.relate_to(a.id);
        hub.relate_to(b.id);

        let mut user = User::new();
        user.record(a.id, InteractionType::View);
        user.record(b.id, InteractionType::View);
        user.record(b.id, InteractionType::Visited);
        let places = vec![a, b, hub];

        let ctx = RecommendationContext::new(&user, &places, &[]);
        let recommended = GraphRecommender.recommend(&ctx);

        assert_eq!(recommended.len(), 1);
        assert!((recommended[0].score - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_empty_history_yields_nothing() {
        let a = Place::new("A", "park");
        let mut b = Place::new("B", "park");
        b.relate_to(a.id);
        let user = User::new();
        let places = vec![a, b];

        let ctx = RecommendationContext::new(&user, &places, &[]);
        assert!(GraphRecommender.recommend(&ctx).is_empty());
    }
}
