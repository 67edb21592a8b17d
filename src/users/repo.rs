use async_trait::async_trait;

use crate::errors::AppResult;
use crate::users::{dao::UserDao, dto::User, repo_types::UserEntity};

/// Persistence seam between the service and the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn registration(&self, user: User) -> AppResult<()>;
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Repository backed by the sqlite data access layer.
#[derive(Clone)]
pub struct SqlUserRepository {
    dao: UserDao,
}

impl SqlUserRepository {
    pub fn new(dao: UserDao) -> Self {
        Self { dao }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn registration(&self, user: User) -> AppResult<()> {
        let entity = UserEntity::from(user);
        self.dao.add(&entity).await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let entities = self.dao.list().await?;
        Ok(entities.into_iter().map(User::from).collect())
    }
}
