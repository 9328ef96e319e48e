use std::collections::HashSet;

use contracts::views::{ViewDefinition, ViewInfo, ViewPhase};

use super::definitions::STANDARD_VIEWS;
use super::error::{ViewError, ViewResult};

/// Ordered, immutable set of reporting view definitions
///
/// Built once and passed explicitly to [`super::create_views`] and
/// [`super::drop_views`]. Order only matters for readability: no view in the
/// standard catalog selects from another catalog view.
#[derive(Debug, Clone)]
pub struct ViewCatalog {
    definitions: Vec<ViewDefinition>,
}

impl ViewCatalog {
    /// The standard inventory catalog (19 views, phases 1 to 5)
    pub fn new() -> Self {
        Self {
            definitions: STANDARD_VIEWS.to_vec(),
        }
    }

    /// Build a catalog from custom definitions, keeping their order
    pub fn with_definitions(definitions: Vec<ViewDefinition>) -> ViewResult<Self> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if !seen.insert(def.name) {
                return Err(ViewError::DuplicateView {
                    name: def.name.to_string(),
                });
            }
        }
        Ok(Self { definitions })
    }

    pub fn definitions(&self) -> &[ViewDefinition] {
        &self.definitions
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.name).collect()
    }

    pub fn sql_statements(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.sql).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ViewDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// CREATE statement for a catalog view
    pub fn sql_for(&self, name: &str) -> ViewResult<&'static str> {
        self.get(name)
            .map(|d| d.sql)
            .ok_or_else(|| ViewError::UnknownView {
                name: name.to_string(),
            })
    }

    /// Definitions of one phase, in catalog order
    pub fn phase(&self, phase: ViewPhase) -> impl Iterator<Item = &ViewDefinition> + '_ {
        self.definitions.iter().filter(move |d| d.phase == phase)
    }

    pub fn infos(&self) -> Vec<ViewInfo> {
        self.definitions.iter().map(ViewInfo::from).collect()
    }

    /// Resolve the views an operation applies to.
    ///
    /// `None` selects the whole catalog. Otherwise the result is the
    /// intersection with `only`, in catalog order; names outside the catalog
    /// are skipped with a warning.
    pub fn resolve(&self, only: Option<&[String]>) -> Vec<&ViewDefinition> {
        let Some(only) = only else {
            return self.definitions.iter().collect();
        };

        for name in only {
            if !self.contains(name) {
                tracing::warn!("Ignoring unknown view '{}'", name);
            }
        }

        self.definitions
            .iter()
            .filter(|d| only.iter().any(|n| n == d.name))
            .collect()
    }
}

impl Default for ViewCatalog {
    fn default() -> Self {
        Self::new()
    }
}
