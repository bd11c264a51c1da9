use super::context::{RecommendationContext, ScoredPlace};
use super::RecommendationSource;
use crate::models::{Place, User};

pub const CUISINE_WEIGHT: f64 = 0.4;
pub const PLACE_TYPE_WEIGHT: f64 = 0.3;
pub const BUDGET_WEIGHT: f64 = 0.2;
pub const LOCATION_WEIGHT: f64 = 0.1;
pub const TIME_OF_DAY_WEIGHT: f64 = 0.1;
pub const FAVORITE_BONUS: f64 = 0.5;
/// Places must score strictly above this to be recommended
pub const CONTEXT_THRESHOLD: f64 = 0.4;

/// Fit of a place against stored preferences and the request's situational context
///
/// Location and time of day only match when both the place label and the request
/// value are present. The favorites bonus is not included.
pub fn context_score(
    user: &User,
    place: &Place,
    location: Option<&str>,
    time_of_day: Option<&str>,
) -> f64 {
    let preferences = &user.preferences;
    let mut score = 0.0;

    if place
        .cuisine_type
        .as_ref()
        .is_some_and(|cuisine| preferences.favorite_cuisines.contains(cuisine))
    {
        score += CUISINE_WEIGHT;
    }
    if preferences.preferred_place_types.contains(&place.place_type) {
        score += PLACE_TYPE_WEIGHT;
    }
    if place
        .budget
        .is_some_and(|budget| preferences.budget_range.contains(budget))
    {
        score += BUDGET_WEIGHT;
    }
    if place.location.is_some() && place.location.as_deref() == location {
        score += LOCATION_WEIGHT;
    }
    if place.time_preference.is_some() && place.time_preference.as_deref() == time_of_day {
        score += TIME_OF_DAY_WEIGHT;
    }

    score
}

/// Scores every place against the traveler's preferences and current context
///
/// Unlike the other sources, output is already sorted best first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextualRecommender;

impl RecommendationSource for ContextualRecommender {
    fn name(&self) -> &'static str {
        "contextual"
    }

    fn recommend<'a>(&self, ctx: &RecommendationContext<'a>) -> Vec<ScoredPlace<'a>> {
        let mut scored: Vec<ScoredPlace<'a>> = ctx
            .catalog
            .iter()
            .map(|place| {
                let mut score = context_score(ctx.user, place, ctx.location, ctx.time_of_day);
                if ctx.user.is_favorite(&place.id) {
                    score += FAVORITE_BONUS;
                }
                ScoredPlace::new(place, score)
            })
            .filter(|scored| scored.score > CONTEXT_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }
}
