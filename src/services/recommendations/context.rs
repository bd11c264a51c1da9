use std::collections::HashMap;
use uuid::Uuid;

use super::behavior::{analyze_behavior, BehaviorProfile};
use crate::models::{Place, User};

/// A candidate place with the score one source assigned to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPlace<'a> {
    pub place: &'a Place,
    pub score: f64,
}

impl<'a> ScoredPlace<'a> {
    pub fn new(place: &'a Place, score: f64) -> Self {
        Self { place, score }
    }

    pub fn id(&self) -> Uuid {
        self.place.id
    }
}

/// Read-only place snapshot indexed by id
pub struct PlaceCatalog<'a> {
    places: &'a [Place],
    by_id: HashMap<Uuid, &'a Place>,
}

impl<'a> PlaceCatalog<'a> {
    pub fn new(places: &'a [Place]) -> Self {
        let by_id = places.iter().map(|p| (p.id, p)).collect();
        Self { places, by_id }
    }

    /// Looks up a place; ids missing from the snapshot resolve to `None`
    pub fn get(&self, place_id: &Uuid) -> Option<&'a Place> {
        self.by_id.get(place_id).copied()
    }

    /// Places in snapshot order
    pub fn iter(&self) -> impl Iterator<Item = &'a Place> {
        self.places.iter()
    }
}

/// Everything a recommendation source may read while scoring one request
pub struct RecommendationContext<'a> {
    pub user: &'a User,
    pub catalog: PlaceCatalog<'a>,
    /// Full user population, possibly including the target
    pub population: &'a [User],
    pub behavior: BehaviorProfile,
    pub location: Option<&'a str>,
    pub time_of_day: Option<&'a str>,
}

impl<'a> RecommendationContext<'a> {
    pub fn new(user: &'a User, places: &'a [Place], population: &'a [User]) -> Self {
        Self {
            user,
            catalog: PlaceCatalog::new(places),
            population,
            behavior: analyze_behavior(user),
            location: None,
            time_of_day: None,
        }
    }

    pub fn with_location(mut self, location: Option<&'a str>) -> Self {
        self.location = location;
        self
    }

    pub fn with_time_of_day(mut self, time_of_day: Option<&'a str>) -> Self {
        self.time_of_day = time_of_day;
        self
    }
}

/// Request-local score accumulator keyed by place id
///
/// Remembers the order in which ids were first scored so that downstream
/// stable sorts stay deterministic.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    order: Vec<Uuid>,
    scores: HashMap<Uuid, f64>,
}

impl ScoreBoard {
    pub fn add(&mut self, place_id: Uuid, amount: f64) {
        match self.scores.get_mut(&place_id) {
            Some(score) => *score += amount,
            None => {
                self.order.push(place_id);
                self.scores.insert(place_id, amount);
            }
        }
    }

    /// Resolves accumulated ids against the catalog, silently dropping misses
    pub fn resolve<'a>(self, catalog: &PlaceCatalog<'a>) -> Vec<ScoredPlace<'a>> {
        let mut resolved = Vec::with_capacity(self.order.len());
        for place_id in self.order {
            match catalog.get(&place_id) {
                Some(place) => resolved.push(ScoredPlace::new(place, self.scores[&place_id])),
                None => tracing::debug!(place_id = %place_id, "Dropping unresolved place"),
            }
        }
        resolved
    }
}
