use sqlx::FromRow;

use crate::users::dto::User;

/// User row in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserEntity {
    pub id: i64,          // surrogate key, assigned by sqlite
    pub email: String,
    pub password: String, // stored as received
    pub name: String,
    pub age: i64,
}

impl From<User> for UserEntity {
    fn from(u: User) -> Self {
        Self {
            id: 0,
            email: u.email,
            password: u.password,
            name: u.name,
            age: u.age,
        }
    }
}

impl From<UserEntity> for User {
    fn from(e: UserEntity) -> Self {
        Self {
            email: e.email,
            password: e.password,
            name: e.name,
            age: e.age,
        }
    }
}
