use std::fmt;

use sea_orm::DbErr;

/// Which half of the drop/create cycle a statement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Drop,
    Create,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Drop => f.write_str("DROP VIEW"),
            StatementKind::Create => f.write_str("CREATE VIEW"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("unknown view: {name}")]
    UnknownView { name: String },

    #[error("view '{name}' is defined more than once")]
    DuplicateView { name: String },

    /// The database rejected a statement. Statements issued earlier in the
    /// same call are not rolled back.
    #[error("{kind} failed for view '{view}': {source}")]
    StatementExecution {
        view: String,
        kind: StatementKind,
        #[source]
        source: DbErr,
    },
}

impl ViewError {
    /// Name of the view the error refers to
    pub fn view_name(&self) -> &str {
        match self {
            ViewError::UnknownView { name } | ViewError::DuplicateView { name } => name,
            ViewError::StatementExecution { view, .. } => view,
        }
    }
}

pub type ViewResult<T> = Result<T, ViewError>;
