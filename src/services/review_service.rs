use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use crate::{
    dto::reviews::CreateReviewRequest,
    entity::{
        products::Entity as Products,
        reviews::{ActiveModel, Entity as Reviews, Model as ReviewModel},
    },
    error::{AppError, AppResult},
    models::{Product, Review},
    state::AppState,
};

/// A missing id is filled with a fresh token when the row is saved.
pub async fn create_review(state: &AppState, payload: CreateReviewRequest) -> AppResult<Review> {
    let active = ActiveModel {
        id: payload.id.map_or(NotSet, Set),
        text: Set(payload.text),
        rating: Set(payload.rating),
        author: Set(payload.author),
    };
    let review = active.insert(&state.orm).await?;

    tracing::info!(review_id = %review.id, "review created");
    Ok(review.into())
}

pub async fn get_review(state: &AppState, id: &str) -> AppResult<Review> {
    Ok(find_model(state, id).await?.into())
}

pub async fn delete_review(state: &AppState, id: &str) -> AppResult<()> {
    let result = Reviews::delete_by_id(id.to_owned()).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(review_id = %id, "review deleted");
    Ok(())
}

pub async fn reviewed_products(state: &AppState, review_id: &str) -> AppResult<Vec<Product>> {
    let review = find_model(state, review_id).await?;
    let products = review
        .find_related(Products)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(products)
}

async fn find_model(state: &AppState, id: &str) -> AppResult<ReviewModel> {
    Reviews::find_by_id(id.to_owned())
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
