use crate::config::AppConfig;
use crate::db;
use crate::users::{dao::UserDao, repo::SqlUserRepository, services::UserService};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let pool = db::connect(&config).await?;
        Ok(Self::from_parts(pool, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        let repo = SqlUserRepository::new(UserDao::new(db));
        Self {
            users: UserService::new(Arc::new(repo)),
            config,
        }
    }

    #[cfg(test)]
    pub(crate) async fn for_tests() -> Self {
        Self::for_tests_on(db::memory_pool().await)
    }

    #[cfg(test)]
    pub(crate) fn for_tests_on(pool: SqlitePool) -> Self {
        use crate::config::ServerConfig;

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
        });
        Self::from_parts(pool, config)
    }
}
