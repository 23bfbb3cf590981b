use serde::{Deserialize, Serialize};

/// One ranked recommendation, shaped for display.
///
/// `sim` and `dist` are preformatted strings ("87.3%", "12.34 km");
/// missing source fields have already been replaced by their fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedPlace {
    pub nama: String,
    pub kategori: String,
    pub rating: Option<f64>,
    pub jumlah_rating: u32,
    pub kecamatan: String,
    pub kabupaten_kota: String,
    pub lat: f64,
    pub lon: f64,
    pub sim: String,
    pub dist: String,
    pub image: String,
    pub gmaps: String,
}

/// The place the recommendations were computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePlace {
    pub nama: String,
    pub lat: f64,
    pub lon: f64,
}

/// Success envelope for the recommend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub source: SourcePlace,
    pub recommendations: Vec<RecommendedPlace>,
}

/// Response for the place-name listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub places: usize,
}

/// Error payload returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
