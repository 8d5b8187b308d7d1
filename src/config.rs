use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub ttl_minutes: i64,
    pub cookie_secure: bool,
}

/// Credentials for the account guaranteed to exist after startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub session: SessionConfig,
    pub admin: AdminBootstrap,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://local.db".into());
        let session = SessionConfig {
            secret: std::env::var("SESSION_SECRET")
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET must be set"))?,
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "clinic-admin".into()),
            ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .filter(|m| *m > 0)
                .unwrap_or(60 * 12),
            cookie_secure: std::env::var("SESSION_COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };
        let admin = AdminBootstrap {
            email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@local".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin12345".into()),
        };
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        Ok(Self {
            database_url,
            host,
            port,
            session,
            admin,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            session: SessionConfig {
                secret: "test-secret".into(),
                issuer: "test-issuer".into(),
                ttl_minutes: 5,
                cookie_secure: false,
            },
            admin: AdminBootstrap {
                email: "Admin@Local".into(),
                password: "admin12345".into(),
            },
        }
    }
}
