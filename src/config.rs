use std::env;

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(10);
        let access_token_ttl = ttl_from_env("JWT_ACCESS_TTL_SECS", 15 * 60);
        let refresh_token_ttl = ttl_from_env("JWT_REFRESH_TTL_SECS", 30 * 24 * 60 * 60);
        Ok(Self {
            database_url,
            max_connections,
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
        })
    }
}

fn ttl_from_env(key: &str, default_secs: i64) -> Duration {
    parse_ttl(env::var(key).ok().as_deref(), default_secs)
}

fn parse_ttl(raw: Option<&str>, default_secs: i64) -> Duration {
    let secs = raw
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(default_secs);
    Duration::seconds(secs)
}
