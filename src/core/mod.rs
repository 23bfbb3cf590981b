// Core algorithm exports
pub mod distance;
pub mod engine;

pub use distance::{distances_from, haversine_distance, radius_bounding_box};
pub use engine::{RecommendError, Recommender};
