use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::{
        new_id,
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
        reviews::Entity as Reviews,
        reviews_products::{
            ActiveModel as ReviewProductActive, Column as ReviewProductCol,
            Entity as ReviewsProducts,
        },
    },
    error::{AppError, AppResult},
    models::{Product, Review},
    params::{Page, ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<Page<Product>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(Column::Name.contains(search))
                .add(Column::Description.contains(search)),
        );
    }

    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }

    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }

    let sort_col = match query.sort_by.unwrap_or(ProductSortBy::Name) {
        ProductSortBy::Name => Column::Name,
        ProductSortBy::Price => Column::Price,
    };

    let mut finder = Products::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };
    finder = finder.order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(Page {
        items,
        page,
        per_page: limit,
        total,
    })
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<Product> {
    Ok(find_model(state, id).await?.into())
}

pub async fn create_product(state: &AppState, payload: CreateProductRequest) -> AppResult<Product> {
    let active = ActiveModel {
        id: Set(payload.id.unwrap_or_else(new_id)),
        name: Set(payload.name),
        description: Set(payload.description),
        img_url: Set(payload.img_url),
        price: Set(payload.price),
    };
    let product = active.insert(&state.orm).await?;

    tracing::info!(product_id = %product.id, "product created");
    Ok(product.into())
}

pub async fn update_product(
    state: &AppState,
    id: &str,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let existing = find_model(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(img_url) = payload.img_url {
        active.img_url = Set(img_url);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }

    let product = active.update(&state.orm).await?;
    tracing::info!(product_id = %product.id, "product updated");
    Ok(product.into())
}

/// Fails with a referential-integrity error while carts, wishlists, shop
/// lists or review links still point at the product.
pub async fn delete_product(state: &AppState, id: &str) -> AppResult<()> {
    let result = Products::delete_by_id(id.to_owned()).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(product_id = %id, "product deleted");
    Ok(())
}

/// Link a review to a product. Linking an existing pair is a no-op.
pub async fn attach_review(state: &AppState, product_id: &str, review_id: &str) -> AppResult<()> {
    let link = ReviewProductActive {
        product_id: Set(product_id.to_owned()),
        review_id: Set(review_id.to_owned()),
    };
    let inserted = ReviewsProducts::insert(link)
        .on_conflict(
            OnConflict::columns([ReviewProductCol::ProductId, ReviewProductCol::ReviewId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&state.orm)
        .await?;

    tracing::info!(product_id, review_id, inserted, "review attached");
    Ok(())
}

pub async fn detach_review(state: &AppState, product_id: &str, review_id: &str) -> AppResult<()> {
    let result = ReviewsProducts::delete_many()
        .filter(ReviewProductCol::ProductId.eq(product_id))
        .filter(ReviewProductCol::ReviewId.eq(review_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(product_id, review_id, "review detached");
    Ok(())
}

pub async fn list_reviews(state: &AppState, product_id: &str) -> AppResult<Vec<Review>> {
    let product = find_model(state, product_id).await?;
    let reviews = product
        .find_related(Reviews)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Review::from)
        .collect();
    Ok(reviews)
}

pub(crate) async fn find_model(state: &AppState, id: &str) -> AppResult<ProductModel> {
    Products::find_by_id(id.to_owned())
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
