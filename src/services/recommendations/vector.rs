use std::collections::HashMap;
use uuid::Uuid;

use crate::models::Interaction;

/// Per-place accumulated interaction weights for one user
///
/// Components keep the order in which each place was first seen. Two vectors are
/// always compared by place id, never by position, so their orders need not agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionVector {
    order: Vec<Uuid>,
    weights: HashMap<Uuid, f64>,
}

impl InteractionVector {
    /// Builds the vector from an interaction log, skipping interactions whose
    /// place reference is missing
    pub fn from_history(history: &[Interaction]) -> Self {
        let mut vector = Self::default();
        for interaction in history {
            let Some(place_id) = interaction.place_id else {
                continue;
            };
            vector.accumulate(place_id, interaction.interaction_type.weight());
        }
        vector
    }

    fn accumulate(&mut self, place_id: Uuid, weight: f64) {
        match self.weights.get_mut(&place_id) {
            Some(total) => *total += weight,
            None => {
                self.order.push(place_id);
                self.weights.insert(place_id, weight);
            }
        }
    }

    /// Accumulated weight for a place, 0 when absent
    pub fn weight(&self, place_id: &Uuid) -> f64 {
        self.weights.get(place_id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, place_id: &Uuid) -> bool {
        self.weights.contains_key(place_id)
    }

    /// Number of distinct places
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distinct place ids in first-occurrence order
    pub fn place_ids(&self) -> impl Iterator<Item = &Uuid> {
        self.order.iter()
    }

    /// Raw components in first-occurrence order
    pub fn components(&self) -> Vec<f64> {
        self.order.iter().map(|id| self.weights[id]).collect()
    }

    pub fn norm_squared(&self) -> f64 {
        self.order
            .iter()
            .map(|id| {
                let w = self.weights[id];
                w * w
            })
            .sum()
    }

    /// Dot product aligned by place id
    pub fn dot(&self, other: &InteractionVector) -> f64 {
        self.order
            .iter()
            .map(|id| self.weights[id] * other.weight(id))
            .sum()
    }
}
