//! Workout catalog.
//!
//! This crate provides a trait-based catalog source with a JSON file
//! implementation, the built-in catalog, and read-only lookups.

#![warn(missing_docs)]

pub mod source;
pub mod json_source;
pub mod builtin;
pub mod catalog;

pub use source::{CatalogSource, CatalogData, CatalogError, Result};
pub use json_source::JsonCatalogSource;
pub use builtin::{builtin_catalog, builtin_data, BuiltinSource};
pub use catalog::{Catalog, IntegrityReport};
