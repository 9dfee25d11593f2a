//! Schema migrations for the questions table

use sqlx::SqlitePool;

use crate::storage::StorageError;

/// Create the questions table if it doesn't exist. Safe to run repeatedly.
pub async fn run(pool: &SqlitePool) -> Result<(), StorageError> {
    tracing::info!("Running question store migrations...");

    // AUTOINCREMENT keeps ids strictly increasing, so id order is insertion order
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL UNIQUE,
            answer TEXT NOT NULL,
            flag BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Question store schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
