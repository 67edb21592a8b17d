use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::config::AppConfig;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        email    TEXT    NOT NULL UNIQUE,
        password TEXT    NOT NULL,
        name     TEXT    NOT NULL,
        age      INTEGER NOT NULL
    )
"#;

pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let db = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// Creates the `users` table if it does not exist yet.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS)
        .execute(db)
        .await
        .context("create users table")?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // An in-memory database lives as long as its connection, so pin a single one.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    ensure_schema(&db).await.expect("create schema");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let db = memory_pool().await;
        ensure_schema(&db).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn connect_fails_for_unreachable_database() {
        let config = AppConfig {
            database_url: "sqlite://no-such-dir/nested/store.db?mode=rwc".into(),
            max_connections: 1,
            server: crate::config::ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
        };
        assert!(connect(&config).await.is_err());
    }

    #[tokio::test]
    async fn ensure_schema_fails_on_closed_pool() {
        let db = memory_pool().await;
        db.close().await;

        let err = ensure_schema(&db).await.unwrap_err();
        assert!(err.to_string().contains("create users table"));
    }
}
