use std::collections::HashMap;

use crate::models::{InteractionType, User};

/// Aggregated engagement of a single user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BehaviorProfile {
    /// Summed weight per interaction type
    pub by_type: HashMap<InteractionType, f64>,
    /// Sum of every interaction weight
    pub total_score: f64,
}

/// Summarizes a user's interaction log into weighted totals
///
/// Every interaction counts, including those whose place has since disappeared.
pub fn analyze_behavior(user: &User) -> BehaviorProfile {
    let mut profile = BehaviorProfile::default();

    for interaction in &user.interaction_history {
        let weight = interaction.interaction_type.weight();
        *profile
            .by_type
            .entry(interaction.interaction_type)
            .or_insert(0.0) += weight;
        profile.total_score += weight;
    }

    profile
}
