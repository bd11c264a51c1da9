use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of action a traveler recorded against a place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    View,
    Favorite,
    Visited,
}

impl InteractionType {
    /// Fixed engagement weight used throughout scoring
    pub fn weight(self) -> f64 {
        match self {
            InteractionType::View => 1.0,
            InteractionType::Favorite => 3.0,
            InteractionType::Visited => 5.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionType::View => "view",
            InteractionType::Favorite => "favorite",
            InteractionType::Visited => "visited",
        }
    }
}

impl Display for InteractionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(InteractionType::View),
            "favorite" => Ok(InteractionType::Favorite),
            "visited" => Ok(InteractionType::Visited),
            other => Err(format!("unknown interaction type '{}'", other)),
        }
    }
}

/// A recorded user action against a place
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// `None` when the referenced place no longer exists in the catalog
    pub place_id: Option<Uuid>,
    pub interaction_type: InteractionType,
    pub interacted_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(place_id: Uuid, interaction_type: InteractionType) -> Self {
        Self {
            place_id: Some(place_id),
            interaction_type,
            interacted_at: Utc::now(),
        }
    }
}

/// Inclusive spending range a traveler is comfortable with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self { min: 0.0, max: 500.0 }
    }
}

impl BudgetRange {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Stated traveler preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub favorite_cuisines: HashSet<String>,
    #[serde(default)]
    pub preferred_place_types: HashSet<String>,
    #[serde(default)]
    pub budget_range: BudgetRange,
}

/// Read-only snapshot of a traveler as handed to the recommendation pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub preferences: Preferences,
    /// Favorite place ids, in the order they were added
    #[serde(default)]
    pub favorites: Vec<Uuid>,
    #[serde(default)]
    pub interaction_history: Vec<Interaction>,
}

impl User {
    /// Creates a user with default preferences and no history
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            preferences: Preferences::default(),
            favorites: Vec::new(),
            interaction_history: Vec::new(),
        }
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Records an interaction; repeated interactions with a place are kept
    pub fn record(&mut self, place_id: Uuid, interaction_type: InteractionType) {
        self.interaction_history
            .push(Interaction::new(place_id, interaction_type));
    }

    /// Adds a favorite place, ignoring duplicates
    pub fn add_favorite(&mut self, place_id: Uuid) {
        if !self.favorites.contains(&place_id) {
            self.favorites.push(place_id);
        }
    }

    pub fn is_favorite(&self, place_id: &Uuid) -> bool {
        self.favorites.contains(place_id)
    }

    /// Distinct place ids this user interacted with
    pub fn interacted_places(&self) -> HashSet<Uuid> {
        self.interaction_history
            .iter()
            .filter_map(|i| i.place_id)
            .collect()
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}
