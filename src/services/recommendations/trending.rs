use super::context::{RecommendationContext, ScoredPlace};
use super::RecommendationSource;

pub const TRENDING_SCORE: f64 = 0.6;
pub const SEASONAL_SCORE: f64 = 0.4;

/// Surfaces places carrying a trending or seasonal flag
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendingRecommender;

impl RecommendationSource for TrendingRecommender {
    fn name(&self) -> &'static str {
        "trending"
    }

    fn recommend<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<ScoredPlace<'a>> {
        ctx.catalog
            .iter()
            .filter(|place| place.trending || place.seasonal)
            .map(|place| {
                // trending wins over seasonal
                let score = if place.trending {
                    TRENDING_SCORE
                } else {
                    SEASONAL_SCORE
                };
                ScoredPlace::new(place, score)
            })
            .collect()
    }
}
