// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, MatrixShapeError, PlaceRecord, SimilarityMatrix, DEFAULT_KABUPATEN_KOTA,
    DEFAULT_KECAMATAN, PLACEHOLDER_IMAGE_URL,
};
pub use requests::RecommendRequest;
pub use responses::{
    ErrorResponse, HealthResponse, PlacesResponse, Recommendation, RecommendedPlace, SourcePlace,
};
