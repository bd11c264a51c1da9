//! Favorites-based recommendations
//!
//! The simpler pipeline: tag matching against the traveler's favorite places, plus
//! the favorites of travelers who share at least one favorite with them.

use std::collections::HashSet;
use uuid::Uuid;

use super::context::PlaceCatalog;
use crate::models::{Place, User};

/// Upper bound on tag-matched places
pub const CONTENT_LIMIT: usize = 10;

/// Places within budget sharing a tag with any favorite place, catalog order
pub fn tag_matches<'a>(user: &User, catalog: &PlaceCatalog<'a>) -> Vec<&'a Place> {
    let favorite_tags: HashSet<&str> = user
        .favorites
        .iter()
        .filter_map(|id| catalog.get(id))
        .flat_map(|place| place.tags.iter().map(String::as_str))
        .collect();

    if favorite_tags.is_empty() {
        return Vec::new();
    }

    let budget_range = user.preferences.budget_range;
    catalog
        .iter()
        .filter(|place| place.budget.is_some_and(|b| budget_range.contains(b)))
        .filter(|place| place.tags.iter().any(|t| favorite_tags.contains(t.as_str())))
        .take(CONTENT_LIMIT)
        .collect()
}

/// Favorites of travelers who share a favorite with `user`, minus the user's own
pub fn shared_favorites<'a>(
    user: &User,
    catalog: &PlaceCatalog<'a>,
    population: &[User],
) -> Vec<&'a Place> {
    let own: HashSet<Uuid> = user.favorites.iter().copied().collect();
    if own.is_empty() {
        return Vec::new();
    }

    population
        .iter()
        .filter(|other| other.id != user.id)
        .filter(|other| other.favorites.iter().any(|id| own.contains(id)))
        .flat_map(|other| other.favorites.iter())
        .filter(|id| !own.contains(*id))
        .filter_map(|id| catalog.get(id))
        .collect()
}

/// Tag matches followed by shared favorites, deduplicated keeping first occurrence
pub fn favorites_based<'a>(
    user: &User,
    catalog: &PlaceCatalog<'a>,
    population: &[User],
) -> Vec<&'a Place> {
    let mut seen = HashSet::new();
    tag_matches(user, catalog)
        .into_iter()
        .chain(shared_favorites(user, catalog, population))
        .filter(|place| seen.insert(place.id))
        .collect()
}
