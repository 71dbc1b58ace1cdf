use sea_orm::sea_query::{LockType, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::cart::{AddToCartRequest, CartEntry},
    entity::{
        cart::{ActiveModel as CartActive, Column as CartCol, Entity as Cart},
        new_id,
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{CartItem, Product},
    services::user_service,
    state::AppState,
};

/// Add `quantity` of a product to the user's cart, merging into the
/// existing row for the pair. A missing user or product surfaces as a
/// referential-integrity violation from the database. A merged quantity
/// past `i32::MAX` is rejected.
pub async fn add_to_cart(
    state: &AppState,
    user_id: &str,
    payload: AddToCartRequest,
) -> AppResult<CartItem> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let txn = state.orm.begin().await?;

    let row = CartActive {
        id: Set(new_id()),
        user_id: Set(user_id.to_owned()),
        product_id: Set(payload.product_id.clone()),
        quantity: Set(payload.quantity),
    };
    let inserted = Cart::insert(row)
        .on_conflict(
            OnConflict::columns([CartCol::UserId, CartCol::ProductId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

    // The pair row exists at this point, so the lock always has a target.
    let existing = Cart::find()
        .filter(pair_condition(user_id, &payload.product_id))
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let item = if inserted > 0 {
        existing
    } else {
        let quantity = existing
            .quantity
            .checked_add(payload.quantity)
            .ok_or_else(|| AppError::BadRequest("cart quantity is too large".to_string()))?;
        let mut active: CartActive = existing.into();
        active.quantity = Set(quantity);
        active.update(&txn).await?
    };

    txn.commit().await?;

    tracing::info!(
        user_id,
        product_id = %item.product_id,
        quantity = item.quantity,
        inserted,
        "cart updated"
    );
    Ok(item.into())
}

pub async fn set_quantity(
    state: &AppState,
    user_id: &str,
    product_id: &str,
    quantity: i32,
) -> AppResult<CartItem> {
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let existing = Cart::find()
        .filter(pair_condition(user_id, product_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CartActive = existing.into();
    active.quantity = Set(quantity);
    let item = active.update(&state.orm).await?;

    tracing::info!(user_id, product_id, quantity, "cart quantity set");
    Ok(item.into())
}

/// Cart rows together with their products, ordered by product name.
pub async fn list_cart(state: &AppState, user_id: &str) -> AppResult<Vec<CartEntry>> {
    let rows = Cart::find()
        .filter(CartCol::UserId.eq(user_id))
        .find_also_related(Products)
        .order_by_asc(ProdCol::Name)
        .all(&state.orm)
        .await?;

    let entries = rows
        .into_iter()
        .filter_map(|(item, product)| {
            product.map(|product| CartEntry {
                item: item.into(),
                product: product.into(),
            })
        })
        .collect();
    Ok(entries)
}

/// Products in the user's cart through the user-to-product relation.
pub async fn cart_products(state: &AppState, user_id: &str) -> AppResult<Vec<Product>> {
    let user = user_service::find_model(state, user_id).await?;
    let products = user
        .find_related(Products)
        .order_by_asc(ProdCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(products)
}

pub async fn remove_from_cart(state: &AppState, user_id: &str, product_id: &str) -> AppResult<()> {
    let result = Cart::delete_many()
        .filter(pair_condition(user_id, product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id, product_id, "removed from cart");
    Ok(())
}

fn pair_condition(user_id: &str, product_id: &str) -> Condition {
    Condition::all()
        .add(CartCol::UserId.eq(user_id))
        .add(CartCol::ProductId.eq(product_id))
}
