//! Wisata Rec - location-based tourism recommendation service
//!
//! Given a selected place, returns the top-N most similar nearby places,
//! filtered by geographic radius and ranked by a precomputed item-item
//! similarity matrix.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::{haversine_distance, radius_bounding_box},
    RecommendError, Recommender,
};
pub use crate::models::{PlaceRecord, Recommendation, RecommendedPlace, SimilarityMatrix};
pub use crate::services::{load_catalog, CatalogError, CatalogStore, LoadError};
