use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

use crate::{
    entity::{
        new_id,
        products::Column as ProdCol,
        users::WishlistProducts,
        wishlist::{ActiveModel as WishlistActive, Column as WishlistCol, Entity as Wishlist},
    },
    error::{AppError, AppResult},
    models::{Product, WishlistItem},
    services::user_service,
    state::AppState,
};

/// Adding a product that is already on the wishlist returns the existing row.
pub async fn add_to_wishlist(
    state: &AppState,
    user_id: &str,
    product_id: &str,
) -> AppResult<WishlistItem> {
    let row = WishlistActive {
        id: Set(new_id()),
        user_id: Set(user_id.to_owned()),
        product_id: Set(product_id.to_owned()),
    };
    let inserted = Wishlist::insert(row)
        .on_conflict(
            OnConflict::columns([WishlistCol::UserId, WishlistCol::ProductId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&state.orm)
        .await?;

    let item = Wishlist::find()
        .filter(WishlistCol::UserId.eq(user_id))
        .filter(WishlistCol::ProductId.eq(product_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if inserted > 0 {
        tracing::info!(user_id, product_id, "added to wishlist");
    } else {
        tracing::debug!(user_id, product_id, "already on wishlist");
    }
    Ok(item.into())
}

pub async fn list_wishlist(state: &AppState, user_id: &str) -> AppResult<Vec<Product>> {
    let user = user_service::find_model(state, user_id).await?;
    let products = user
        .find_linked(WishlistProducts)
        .order_by_asc(ProdCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(products)
}

pub async fn remove_from_wishlist(
    state: &AppState,
    user_id: &str,
    product_id: &str,
) -> AppResult<()> {
    let result = Wishlist::delete_many()
        .filter(WishlistCol::UserId.eq(user_id))
        .filter(WishlistCol::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id, product_id, "removed from wishlist");
    Ok(())
}
