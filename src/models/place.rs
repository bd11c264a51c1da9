use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// A place that can be recommended to a traveler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    /// Category label (restaurant, museum, park, ...)
    #[serde(rename = "type")]
    pub place_type: String,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    /// Typical cost of a visit
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Outgoing relation edges; not guaranteed to be symmetric
    #[serde(default)]
    pub related_places: HashSet<Uuid>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_preference: Option<String>,
}

impl Place {
    /// Creates a place with no context labels, tags or relations
    pub fn new(name: impl Into<String>, place_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            place_type: place_type.into(),
            cuisine_type: None,
            budget: None,
            tags: Vec::new(),
            related_places: HashSet::new(),
            trending: false,
            seasonal: false,
            location: None,
            time_preference: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine_type = Some(cuisine.into());
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_time_preference(mut self, time_of_day: impl Into<String>) -> Self {
        self.time_preference = Some(time_of_day.into());
        self
    }

    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn seasonal(mut self) -> Self {
        self.seasonal = true;
        self
    }

    /// Adds an edge pointing from this place to `place_id`
    pub fn relate_to(&mut self, place_id: Uuid) {
        self.related_places.insert(place_id);
    }

    pub fn is_related_to(&self, place_id: &Uuid) -> bool {
        self.related_places.contains(place_id)
    }
}
