use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entity::{
        new_id,
        products::{Column as ProdCol, Entity as Products},
        shop_list::{ActiveModel, Entity as ShopLists, Model as ShopListModel},
        shop_list_products::{
            ActiveModel as ShopListProductActive, Column as ShopListProductCol,
            Entity as ShopListProducts,
        },
    },
    error::{AppError, AppResult},
    models::{Product, ShopList},
    state::AppState,
};

/// The creation date is left to the database default.
pub async fn create_shop_list(state: &AppState, id: Option<String>) -> AppResult<ShopList> {
    let active = ActiveModel {
        id: Set(id.unwrap_or_else(new_id)),
        date: NotSet,
    };
    let shop_list = active.insert(&state.orm).await?;

    tracing::info!(shop_list_id = %shop_list.id, "shop list created");
    Ok(shop_list.into())
}

pub async fn get_shop_list(state: &AppState, id: &str) -> AppResult<ShopList> {
    Ok(find_model(state, id).await?.into())
}

pub async fn delete_shop_list(state: &AppState, id: &str) -> AppResult<()> {
    let result = ShopLists::delete_by_id(id.to_owned()).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(shop_list_id = %id, "shop list deleted");
    Ok(())
}

/// Linking an existing pair is a no-op.
pub async fn add_product(state: &AppState, shop_list_id: &str, product_id: &str) -> AppResult<()> {
    let link = ShopListProductActive {
        shop_list_id: Set(shop_list_id.to_owned()),
        product_id: Set(product_id.to_owned()),
    };
    let inserted = ShopListProducts::insert(link)
        .on_conflict(
            OnConflict::columns([ShopListProductCol::ShopListId, ShopListProductCol::ProductId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&state.orm)
        .await?;

    tracing::info!(shop_list_id, product_id, inserted, "product added to shop list");
    Ok(())
}

pub async fn remove_product(
    state: &AppState,
    shop_list_id: &str,
    product_id: &str,
) -> AppResult<()> {
    let result = ShopListProducts::delete_many()
        .filter(ShopListProductCol::ShopListId.eq(shop_list_id))
        .filter(ShopListProductCol::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(shop_list_id, product_id, "product removed from shop list");
    Ok(())
}

pub async fn list_products(state: &AppState, shop_list_id: &str) -> AppResult<Vec<Product>> {
    let shop_list = find_model(state, shop_list_id).await?;
    let products = shop_list
        .find_related(Products)
        .order_by_asc(ProdCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(products)
}

async fn find_model(state: &AppState, id: &str) -> AppResult<ShopListModel> {
    ShopLists::find_by_id(id.to_owned())
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
