#![allow(dead_code)]

use chrono::Duration;
use shop_schema::{
    auth::TokenIssuer,
    db::{create_orm_conn, run_migrations},
    dto::{products::CreateProductRequest, users::NewUser},
    entity::new_id,
    models::{Product, User},
    services::{product_service, user_service},
    state::AppState,
};

/// Connects to `TEST_DATABASE_URL` when set, otherwise to a private
/// in-memory SQLite database. Rows are never truncated, so helpers below
/// generate unique ids and emails.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let (database_url, max_connections) = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => (url, 5),
        // One connection keeps every query on the same in-memory database.
        Err(_) => ("sqlite::memory:".to_string(), 1),
    };

    let orm = create_orm_conn(&database_url, max_connections).await?;
    run_migrations(&orm).await?;

    Ok(AppState {
        orm,
        tokens: TokenIssuer::new("test-secret", Duration::minutes(15), Duration::days(30)),
    })
}

pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@x.com", &new_id()[..8])
}

pub async fn create_user(state: &AppState, email: &str, password: &str) -> anyhow::Result<User> {
    let user = user_service::create_user(
        state,
        NewUser {
            id: None,
            first_name: None,
            last_name: None,
            email: email.to_string(),
            password: password.to_string(),
            is_admin: false,
        },
    )
    .await?;
    Ok(user)
}

pub async fn create_product(state: &AppState, name: &str, price: f64) -> anyhow::Result<Product> {
    let product = product_service::create_product(
        state,
        CreateProductRequest {
            id: None,
            name: name.to_string(),
            description: format!("{name} description"),
            img_url: format!("/img/{name}.png"),
            price,
        },
    )
    .await?;
    Ok(product)
}
