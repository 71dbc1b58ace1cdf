use sea_orm::DatabaseConnection;

use crate::{auth::tokens::TokenIssuer, config::AppConfig, db::create_orm_conn};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let orm = create_orm_conn(&config.database_url, config.max_connections).await?;
        Ok(Self {
            orm,
            tokens: TokenIssuer::from_config(config),
        })
    }
}
