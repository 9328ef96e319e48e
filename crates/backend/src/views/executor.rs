use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, RuntimeErr};
use sqlx::sqlite::SqlitePool;

/// The one capability the view lifecycle needs from a database handle:
/// run a raw statement that returns no rows, failing on any error.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute_sql(&self, sql: &str) -> Result<(), DbErr>;
}

#[async_trait]
impl SqlExecutor for DatabaseConnection {
    async fn execute_sql(&self, sql: &str) -> Result<(), DbErr> {
        self.execute_unprepared(sql).await.map(|_| ())
    }
}

#[async_trait]
impl SqlExecutor for DatabaseTransaction {
    async fn execute_sql(&self, sql: &str) -> Result<(), DbErr> {
        self.execute_unprepared(sql).await.map(|_| ())
    }
}

#[async_trait]
impl SqlExecutor for SqlitePool {
    async fn execute_sql(&self, sql: &str) -> Result<(), DbErr> {
        sqlx::query(sql)
            .execute(self)
            .await
            .map(|_| ())
            .map_err(|e| DbErr::Exec(RuntimeErr::SqlxError(e)))
    }
}
