use crate::models::{MatrixShapeError, PlaceRecord, SimilarityMatrix};
use thiserror::Error;

/// Errors that can occur when assembling the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    MatrixShape(#[from] MatrixShapeError),

    #[error("catalog has {places} places but similarity matrix is {dim}x{dim}")]
    DimensionMismatch { places: usize, dim: usize },
}

/// In-memory catalog of places plus their similarity matrix.
///
/// Built once at startup and immutable afterwards; handlers share it through
/// an `Arc`. Record order is load order and is the positional key into the
/// similarity matrix, so the two are validated against each other here
/// rather than trusted implicitly.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    places: Vec<PlaceRecord>,
    similarity: SimilarityMatrix,
}

impl CatalogStore {
    /// Assemble a catalog, enforcing that the matrix dimension equals the
    /// record count.
    pub fn new(places: Vec<PlaceRecord>, similarity: SimilarityMatrix) -> Result<Self, CatalogError> {
        if similarity.dim() != places.len() {
            return Err(CatalogError::DimensionMismatch {
                places: places.len(),
                dim: similarity.dim(),
            });
        }
        Ok(Self { places, similarity })
    }

    /// Catalog with no places, used when the data files fail to load.
    /// Every lookup against it misses, so recommend calls return not-found.
    pub fn empty() -> Self {
        Self {
            places: Vec::new(),
            similarity: SimilarityMatrix::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Position of the first record whose name matches exactly.
    ///
    /// Duplicate names are possible in the source data; the first in catalog
    /// order wins, matching the upstream dataset's behavior.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.places.iter().position(|p| p.nama == name)
    }

    pub fn record(&self, position: usize) -> Option<&PlaceRecord> {
        self.places.get(position)
    }

    pub fn records(&self) -> &[PlaceRecord] {
        &self.places
    }

    /// Similarity of every place to the one at `position`.
    pub fn similarity_row(&self, position: usize) -> Option<&[f64]> {
        self.similarity.row(position)
    }

    /// All place names, sorted alphabetically with duplicates collapsed.
    /// Feeds the caller's selection list.
    pub fn all_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.places.iter().map(|p| p.nama.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}
