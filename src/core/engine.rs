use crate::core::distance::{distances_from, radius_bounding_box};
use crate::models::{Recommendation, RecommendedPlace, SourcePlace};
use crate::services::CatalogStore;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the recommendation engine
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The requested source place is not in the catalog.
    #[error("Tempat tidak ditemukan")]
    PlaceNotFound,

    /// A parameter was outside the representable domain.
    #[error("invalid parameter: {0}")]
    InvalidInput(String),

    /// The catalog is internally inconsistent. Load-time checks should make
    /// this unreachable; it is kept so a bad state degrades to an error
    /// response instead of a panic.
    #[error("catalog state error: {0}")]
    Corrupt(String),
}

/// Recommendation orchestrator
///
/// Combines the precomputed similarity row of the selected place with a
/// real-time radius filter over the whole catalog:
/// 1. Resolve the source place by name
/// 2. Bounding-box pre-filter, then one batch pass of exact haversine
///    distances
/// 3. Keep records within the radius, excluding every record that shares
///    the source name
/// 4. Rank by similarity descending, truncate to top-N, shape for display
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<CatalogStore>,
}

impl Recommender {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Top-N places most similar to `place` within `radius_km`.
    ///
    /// `top_n` larger than the candidate pool and a radius that qualifies
    /// nothing both succeed with a short or empty list. The radius bound is
    /// inclusive. Ties in similarity keep catalog order (stable sort).
    pub fn recommend(
        &self,
        place: &str,
        top_n: usize,
        radius_km: f64,
    ) -> Result<Recommendation, RecommendError> {
        if !radius_km.is_finite() {
            return Err(RecommendError::InvalidInput(format!(
                "radius must be a finite number, got {}",
                radius_km
            )));
        }

        let source_idx = self
            .catalog
            .position_by_name(place)
            .ok_or(RecommendError::PlaceNotFound)?;

        // position_by_name guarantees the record exists
        let source = self
            .catalog
            .record(source_idx)
            .ok_or_else(|| RecommendError::Corrupt(format!("no record at position {}", source_idx)))?;
        let (source_lat, source_lon) = (source.latitude, source.longitude);

        let sim_scores = self
            .catalog
            .similarity_row(source_idx)
            .ok_or_else(|| {
                RecommendError::Corrupt(format!("no similarity row at position {}", source_idx))
            })?;
        if sim_scores.len() != self.catalog.len() {
            return Err(RecommendError::Corrupt(format!(
                "similarity row has {} entries for a catalog of {}",
                sim_scores.len(),
                self.catalog.len()
            )));
        }

        // Cheap rectangular pre-filter; the box contains the full circle so
        // no true candidate is lost before the exact distance check.
        let bbox = radius_bounding_box(source_lat, source_lon, radius_km);

        // Self-exclusion is by name: duplicate-named rows are all dropped,
        // not just the matched position.
        let prefiltered: Vec<usize> = self
            .catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                record.nama != place && bbox.contains(record.latitude, record.longitude)
            })
            .map(|(j, _)| j)
            .collect();

        // One batch distance pass over the survivors
        let coords: Vec<(f64, f64)> = prefiltered
            .iter()
            .map(|&j| {
                let record = &self.catalog.records()[j];
                (record.latitude, record.longitude)
            })
            .collect();
        let dist_km = distances_from(source_lat, source_lon, &coords);

        let mut candidates: Vec<(usize, f64)> = prefiltered
            .into_iter()
            .zip(dist_km)
            .filter(|&(_, d)| d <= radius_km)
            .collect();

        // Stable sort keeps catalog order among equal similarities
        candidates.sort_by(|a, b| {
            sim_scores[b.0]
                .partial_cmp(&sim_scores[a.0])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(top_n);

        let recommendations = candidates
            .into_iter()
            .map(|(j, dist_km)| {
                let record = &self.catalog.records()[j];
                RecommendedPlace {
                    nama: record.nama.clone(),
                    kategori: record.kategori.clone(),
                    rating: record.rating,
                    jumlah_rating: record.rating_count(),
                    kecamatan: record.kecamatan_or_default().to_string(),
                    kabupaten_kota: record.kabupaten_kota_or_default().to_string(),
                    lat: record.latitude,
                    lon: record.longitude,
                    sim: format_similarity(sim_scores[j]),
                    dist: format_distance(dist_km),
                    image: record.image_or_placeholder().to_string(),
                    gmaps: record.link.clone(),
                }
            })
            .collect();

        Ok(Recommendation {
            source: SourcePlace {
                nama: place.to_string(),
                lat: source_lat,
                lon: source_lon,
            },
            recommendations,
        })
    }
}

/// Similarity score as a percentage string with one decimal, e.g. "87.3%".
#[inline]
fn format_similarity(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Distance as a kilometer string with two decimals, e.g. "12.34 km".
#[inline]
fn format_distance(dist_km: f64) -> String {
    format!("{:.2} km", dist_km)
}
