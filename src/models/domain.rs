use serde::{Deserialize, Serialize};

/// Fallback sub-district when the source data has none.
pub const DEFAULT_KECAMATAN: &str = "Bogor";

/// Fallback regency/city when the source data has none.
pub const DEFAULT_KABUPATEN_KOTA: &str = "Jawa Barat";

/// Placeholder shown for places without an image link.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// One point of interest from the catalog.
///
/// Field names follow the CSV headers of the prepared dataset. Optional
/// fields stay optional here; display fallbacks are applied only when a
/// record is shaped into a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "nama_tempat_wisata")]
    pub nama: String,
    pub kategori: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub jumlah_rating: Option<u32>,
    #[serde(default)]
    pub kecamatan: Option<String>,
    #[serde(default)]
    pub kabupaten_kota: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub link_gambar: Option<String>,
    pub link: String,
}

impl PlaceRecord {
    /// Rating count with the documented zero fallback.
    pub fn rating_count(&self) -> u32 {
        self.jumlah_rating.unwrap_or(0)
    }

    pub fn kecamatan_or_default(&self) -> &str {
        self.kecamatan.as_deref().unwrap_or(DEFAULT_KECAMATAN)
    }

    pub fn kabupaten_kota_or_default(&self) -> &str {
        self.kabupaten_kota.as_deref().unwrap_or(DEFAULT_KABUPATEN_KOTA)
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.link_gambar.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

/// Precomputed item-item similarity scores, row-indexed by catalog position.
///
/// The matrix is symmetric by construction but readers never rely on that:
/// the engine always reads row `i` for source position `i`.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Build a matrix from raw rows. Fails unless the matrix is square.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixShapeError> {
        let dim = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixShapeError {
                    row: i,
                    expected: dim,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// An empty 0x0 matrix, used for the degraded no-data mode.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Matrix dimension (N for an NxN matrix).
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Similarity of every catalog item to the item at `position`.
    pub fn row(&self, position: usize) -> Option<&[f64]> {
        self.rows.get(position).map(Vec::as_slice)
    }
}

/// A non-square similarity matrix was supplied.
#[derive(Debug, Clone, thiserror::Error)]
#[error("similarity matrix is not square: row {row} has {actual} entries, expected {expected}")]
pub struct MatrixShapeError {
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

/// Geospatial bounding box used to pre-filter candidates before the exact
/// haversine check.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}
