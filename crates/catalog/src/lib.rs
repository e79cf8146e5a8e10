//! # Catalog Crate
//!
//! This crate holds the tool catalog: the entry data model and the
//! immutable snapshot that every discovery operation reads from.
//!
//! ## Main Components
//!
//! - **types**: Entry, CatalogSnapshot, category helpers
//! - **parser**: Parse the JSON catalog file into entries
//! - **index**: Build id/category indices and validate the snapshot
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogSnapshot;
//! use std::path::Path;
//!
//! let snapshot = CatalogSnapshot::load_from_file(Path::new("data/catalog.json"))?;
//! let entry = snapshot.get(1).unwrap();
//! println!("{} is in {}", entry.name, entry.category_slug());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{category_slug, CatalogSnapshot, CategorySummary, Entry, EntryId};
