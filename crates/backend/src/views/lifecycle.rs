use contracts::views::{CreateViewsOptions, ViewDefinition};

use super::catalog::ViewCatalog;
use super::error::{StatementKind, ViewError, ViewResult};
use super::executor::SqlExecutor;

/// Create the catalog views (all of them, or `options.only`) in catalog order.
///
/// With `drop_existing` every target is dropped first, so changed SQL text
/// replaces the stored definition. Both statements are idempotent; after a
/// failure the call can simply be repeated.
///
/// # Errors
/// The first statement the database rejects aborts the call. Views created
/// before it stay in place.
pub async fn create_views<E>(
    db: &E,
    catalog: &ViewCatalog,
    options: &CreateViewsOptions,
) -> ViewResult<()>
where
    E: SqlExecutor + ?Sized,
{
    let targets = catalog.resolve(options.only.as_deref());
    tracing::info!(
        "Creating {} view(s) (drop existing: {})",
        targets.len(),
        options.drop_existing
    );

    if options.drop_existing {
        drop_targets(db, &targets).await?;
    }

    for def in &targets {
        tracing::debug!("CREATE VIEW {}", def.name);
        run(db, def.name, StatementKind::Create, def.sql).await?;
    }

    tracing::info!("Views ready: {}", targets.len());
    Ok(())
}

/// Drop the catalog views (all of them, or `only`) in catalog order.
///
/// Only catalog names are ever interpolated into the statement.
pub async fn drop_views<E>(db: &E, catalog: &ViewCatalog, only: Option<&[String]>) -> ViewResult<()>
where
    E: SqlExecutor + ?Sized,
{
    let targets = catalog.resolve(only);
    tracing::info!("Dropping {} view(s)", targets.len());
    drop_targets(db, &targets).await
}

async fn drop_targets<E>(db: &E, targets: &[&ViewDefinition]) -> ViewResult<()>
where
    E: SqlExecutor + ?Sized,
{
    for def in targets {
        tracing::debug!("DROP VIEW {}", def.name);
        let sql = drop_statement(def.name);
        run(db, def.name, StatementKind::Drop, &sql).await?;
    }
    Ok(())
}

pub(crate) fn drop_statement(view: &str) -> String {
    format!("DROP VIEW IF EXISTS {}", view)
}

async fn run<E>(db: &E, view: &str, kind: StatementKind, sql: &str) -> ViewResult<()>
where
    E: SqlExecutor + ?Sized,
{
    db.execute_sql(sql).await.map_err(|source| {
        tracing::error!("{} {} failed: {}", kind, view, source);
        ViewError::StatementExecution {
            view: view.to_string(),
            kind,
            source,
        }
    })
}
