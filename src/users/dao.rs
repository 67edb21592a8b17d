use sqlx::SqlitePool;

use crate::users::repo_types::UserEntity;

/// Raw SQL access to the `users` table.
#[derive(Clone)]
pub struct UserDao {
    db: SqlitePool,
}

impl UserDao {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Insert one row. `entity.id` is ignored; sqlite assigns it.
    pub async fn add(&self, entity: &UserEntity) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (email, password, name, age)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entity.email)
        .bind(&entity.password)
        .bind(&entity.name)
        .bind(entity.age)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    /// All rows in insertion order.
    pub async fn list(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, password, name, age
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
    }
}
