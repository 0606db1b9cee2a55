//! In-memory catalog of classes
//!
//! Records are created from a validated [`ClassDraft`], listed in insertion
//! order, previewed by id and deleted. Nothing is persisted.

mod draft;
mod errors;
mod store;
mod types;

pub use draft::{ClassDraft, FieldError, ValidationErrors};
pub use errors::{CatalogError, CatalogResult};
pub use store::ClassCatalog;
pub use types::{ClassId, ClassRecord, ClassType};
