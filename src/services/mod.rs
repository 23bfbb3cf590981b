// Service exports
pub mod catalog;
pub mod loader;

pub use catalog::{CatalogError, CatalogStore};
pub use loader::{load_catalog, LoadError};
