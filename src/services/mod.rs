pub mod recommendations;

pub use recommendations::{get_favorite_recommendations, get_recommendations};
