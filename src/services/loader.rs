use crate::models::{PlaceRecord, SimilarityMatrix};
use crate::services::catalog::{CatalogError, CatalogStore};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the data files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("bad matrix value at row {row}, column {col} in {path}")]
    MatrixValue { path: String, row: usize, col: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load the place catalog and similarity matrix from disk.
///
/// The catalog is a headered CSV (one row per place, prepared offline); the
/// matrix is a headerless CSV of floats whose row order matches the catalog.
/// The dimension invariant between the two is enforced by `CatalogStore::new`.
pub fn load_catalog<P: AsRef<Path>>(catalog_path: P, matrix_path: P) -> Result<CatalogStore, LoadError> {
    let places = read_places(catalog_path.as_ref())?;
    let similarity = read_similarity_matrix(matrix_path.as_ref())?;
    Ok(CatalogStore::new(places, similarity)?)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn read_places(path: &Path) -> Result<Vec<PlaceRecord>, LoadError> {
    let contents = read_file(path)?;
    let mut reader = csv::Reader::from_reader(contents.as_bytes());

    let mut places = Vec::new();
    for result in reader.deserialize() {
        let record: PlaceRecord = result.map_err(|e| LoadError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;
        places.push(record);
    }
    Ok(places)
}

fn read_similarity_matrix(path: &Path) -> Result<SimilarityMatrix, LoadError> {
    let contents = read_file(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut row = Vec::with_capacity(record.len());
        for (j, field) in record.iter().enumerate() {
            let value: f64 = field.trim().parse().map_err(|_| LoadError::MatrixValue {
                path: path.display().to_string(),
                row: i,
                col: j,
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(SimilarityMatrix::new(rows).map_err(CatalogError::from)?)
}
