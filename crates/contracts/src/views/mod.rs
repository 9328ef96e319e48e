//! Reporting view contracts
//!
//! Types shared between the view catalog and anything that lists or drives it.
//! Views here are plain SQL views: the database re-evaluates them on every
//! query, nothing is cached or refreshed.

pub mod definition;
pub mod options;

pub use definition::{ViewDefinition, ViewInfo, ViewPhase};
pub use options::CreateViewsOptions;
