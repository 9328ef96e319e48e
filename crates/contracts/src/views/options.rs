use serde::{Deserialize, Serialize};

fn default_drop_existing() -> bool {
    true
}

/// Options for creating reporting views
///
/// Doubles as the `[views]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateViewsOptions {
    /// Issue `DROP VIEW IF EXISTS` for every target before creating it
    #[serde(default = "default_drop_existing")]
    pub drop_existing: bool,
    /// Restrict the operation to these view names (catalog order is kept)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<String>>,
}

impl Default for CreateViewsOptions {
    fn default() -> Self {
        Self {
            drop_existing: true,
            only: None,
        }
    }
}

impl CreateViewsOptions {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: Some(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn keep_existing(mut self) -> Self {
        self.drop_existing = false;
        self
    }
}
