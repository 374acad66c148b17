//! The garden catalog: which plants grow where, and in which colors.
//!
//! Catalogs are RON lists of [`PlantEntry`] values. A built-in garden is
//! available for running without any files on disk.

mod catalog;
mod entry;
mod error;

pub use catalog::GardenCatalog;
pub use entry::PlantEntry;
pub use error::CatalogError;
