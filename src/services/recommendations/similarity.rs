//! Hybrid user-user similarity
//!
//! Blends cosine similarity over interaction-weight vectors with Jaccard
//! similarity over the sets of places each user interacted with.

use super::vector::InteractionVector;
use crate::models::User;

pub const COSINE_WEIGHT: f64 = 0.7;
pub const JACCARD_WEIGHT: f64 = 0.3;

/// Cosine similarity aligned by place id; 0 when either vector has no magnitude
pub fn cosine_similarity(a: &InteractionVector, b: &InteractionVector) -> f64 {
    let denominator = (a.norm_squared() * b.norm_squared()).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    a.dot(b) / denominator
}

/// Jaccard index over distinct interacted places; 0 when both are empty
pub fn jaccard_similarity(a: &InteractionVector, b: &InteractionVector) -> f64 {
    let intersection = a.place_ids().filter(|id| b.contains(id)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Hybrid similarity of two prebuilt vectors, in [0, 1]
pub fn hybrid_similarity(a: &InteractionVector, b: &InteractionVector) -> f64 {
    let score = COSINE_WEIGHT * cosine_similarity(a, b) + JACCARD_WEIGHT * jaccard_similarity(a, b);
    score.clamp(0.0, 1.0)
}

/// Hybrid similarity between two users
///
/// Each user's vector is built exactly once for the comparison.
pub fn user_similarity(u1: &User, u2: &User) -> f64 {
    let v1 = InteractionVector::from_history(&u1.interaction_history);
    let v2 = InteractionVector::from_history(&u2.interaction_history);
    hybrid_similarity(&v1, &v2)
}
