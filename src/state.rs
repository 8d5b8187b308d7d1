use crate::auth::session::SessionKeys;
use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub session: Arc<SessionKeys>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::init_pool(&config.database_url).await?;
        db::migrate(&db).await?;
        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        let session = Arc::new(SessionKeys::new(&config.session));
        Self {
            db,
            config,
            session,
        }
    }

    /// Fresh in-memory database with the schema applied.
    #[cfg(test)]
    pub async fn for_tests() -> Self {
        let config = Arc::new(AppConfig::for_tests());
        let db = db::init_pool(&config.database_url)
            .await
            .expect("in-memory pool");
        db::migrate(&db).await.expect("migrations apply");
        Self::from_parts(db, config)
    }
}
