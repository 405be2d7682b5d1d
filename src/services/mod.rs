//! External collaborators consumed by the pipeline.
//!
//! The prerequisite validator and the search command talk to the course
//! catalog exclusively through the [`CatalogLookup`] trait so the core
//! stays testable with in-memory doubles; [`HttpCatalog`] is the
//! production implementation.

pub mod catalog;

pub use catalog::{CatalogError, CatalogLookup, HttpCatalog, LookupResponse};
