use std::sync::Arc;

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::users::{dto::User, repo::UserRepository};

pub const MIN_AGE: i64 = 18;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Admits the user only when `age >= MIN_AGE`.
    pub async fn registration(&self, user: User) -> AppResult<()> {
        if user.age < MIN_AGE {
            debug!(age = user.age, "registration below minimum age");
            return Err(AppError::Validation("age less 18".into()));
        }
        self.repo.registration(user).await
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}
