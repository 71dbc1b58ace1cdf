//! Demo data for local development. Every step checks for existing rows,
//! so running it again leaves the database unchanged.

use crate::{
    dto::{products::CreateProductRequest, reviews::CreateReviewRequest, users::NewUser},
    error::{AppError, AppResult},
    services::{product_service, review_service, shop_list_service, user_service},
    state::AppState,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const USER_EMAIL: &str = "user@example.com";
pub const SHOP_LIST_ID: &str = "weekly-groceries";

pub const PRODUCTS: [(&str, &str, &str, f64); 3] = [
    ("rust-hoodie", "Rust Hoodie", "Warm hoodie for Rustaceans", 55.0),
    ("ferris-mug", "Ferris Mug", "Coffee tastes better with Ferris", 12.0),
    ("sticker-pack", "Rust Sticker Pack", "Decorate your laptop", 5.0),
];

#[derive(Debug)]
pub struct Seeded {
    pub admin_id: String,
    pub user_id: String,
}

pub async fn run(state: &AppState) -> AppResult<Seeded> {
    let admin_id = ensure_user(state, ADMIN_EMAIL, "admin123", true).await?;
    let user_id = ensure_user(state, USER_EMAIL, "user123", false).await?;
    seed_products(state).await?;
    seed_shop_list(state, &user_id).await?;

    Ok(Seeded { admin_id, user_id })
}

async fn ensure_user(
    state: &AppState,
    email: &str,
    password: &str,
    is_admin: bool,
) -> AppResult<String> {
    if let Some(user) = user_service::find_by_email(state, email).await? {
        return Ok(user.id);
    }

    let user = user_service::create_user(
        state,
        NewUser {
            id: None,
            first_name: None,
            last_name: None,
            email: email.to_string(),
            password: password.to_string(),
            is_admin,
        },
    )
    .await?;
    Ok(user.id)
}

async fn seed_products(state: &AppState) -> AppResult<()> {
    for (id, name, description, price) in PRODUCTS {
        match product_service::get_product(state, id).await {
            Ok(_) => continue,
            Err(AppError::NotFound) => {}
            Err(err) => return Err(err),
        }

        product_service::create_product(
            state,
            CreateProductRequest {
                id: Some(id.to_string()),
                name: name.to_string(),
                description: description.to_string(),
                img_url: format!("/static/img/{id}.png"),
                price,
            },
        )
        .await?;

        let review = review_service::create_review(
            state,
            CreateReviewRequest {
                id: None,
                text: format!("{name} is great"),
                rating: 5.0,
                author: "seed".to_string(),
            },
        )
        .await?;
        product_service::attach_review(state, id, &review.id).await?;
    }

    tracing::info!("seeded products");
    Ok(())
}

async fn seed_shop_list(state: &AppState, user_id: &str) -> AppResult<()> {
    match shop_list_service::get_shop_list(state, SHOP_LIST_ID).await {
        Ok(_) => {}
        Err(AppError::NotFound) => {
            shop_list_service::create_shop_list(state, Some(SHOP_LIST_ID.to_string())).await?;
        }
        Err(err) => return Err(err),
    }

    // Both links are no-ops when already present.
    shop_list_service::add_product(state, SHOP_LIST_ID, "ferris-mug").await?;
    user_service::add_shop_list(state, user_id, SHOP_LIST_ID).await?;
    Ok(())
}
