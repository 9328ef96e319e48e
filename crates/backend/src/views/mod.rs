//! Inventory reporting views
//!
//! A fixed catalog of `CREATE VIEW` statements over the external inventory
//! schema, plus idempotent create/drop. These are ordinary SQL views: the
//! database recomputes them on every query, there is nothing to refresh.
//!
//! ```ignore
//! let db = shared::data::db::connect(&path).await?;
//! let catalog = ViewCatalog::new();
//! create_views(&db, &catalog, &CreateViewsOptions::default()).await?;
//! ```

pub mod catalog;
pub mod definitions;
pub mod error;
pub mod executor;
pub mod lifecycle;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::ViewCatalog;
pub use contracts::views::{CreateViewsOptions, ViewDefinition, ViewInfo, ViewPhase};
pub use error::{StatementKind, ViewError, ViewResult};
pub use executor::SqlExecutor;
pub use lifecycle::{create_views, drop_views};
