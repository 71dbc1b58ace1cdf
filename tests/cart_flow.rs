mod common;

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use shop_schema::{
    dto::cart::AddToCartRequest,
    entity::{cart, wishlist},
    error::AppError,
    services::{cart_service, wishlist_service},
};

use common::{create_product, create_user, setup_state, unique_email};

fn add(product_id: &str, quantity: i32) -> AddToCartRequest {
    AddToCartRequest {
        product_id: product_id.to_string(),
        quantity,
    }
}

#[tokio::test]
async fn cart_rows_need_existing_user_and_product() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("cart"), "pw").await?;
    let product = create_product(&state, "Kettle", 40.0).await?;

    let err = cart_service::add_to_cart(&state, "no-such-user", add(&product.id, 1))
        .await
        .unwrap_err();
    assert!(
        matches!(err, AppError::ReferentialIntegrityViolation(_)),
        "got {err:?}"
    );

    let err = cart_service::add_to_cart(&state, &user.id, add("no-such-product", 1))
        .await
        .unwrap_err();
    assert!(
        matches!(err, AppError::ReferentialIntegrityViolation(_)),
        "got {err:?}"
    );

    assert!(cart_service::list_cart(&state, &user.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn adding_the_same_product_merges_quantities() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("merge"), "pw").await?;
    let product = create_product(&state, "Teapot", 25.0).await?;

    let first = cart_service::add_to_cart(&state, &user.id, add(&product.id, 2)).await?;
    let second = cart_service::add_to_cart(&state, &user.id, add(&product.id, 3)).await?;
    assert_eq!(first.id, second.id);
    assert_eq!(second.quantity, 5);

    let entries = cart_service::list_cart(&state, &user.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item.quantity, 5);
    assert_eq!(entries[0].product, product);

    let bad = cart_service::add_to_cart(&state, &user.id, add(&product.id, 0)).await;
    assert!(matches!(bad, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn merged_quantity_past_i32_max_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("overflow"), "pw").await?;
    let product = create_product(&state, "Grain", 0.1).await?;

    cart_service::add_to_cart(&state, &user.id, add(&product.id, i32::MAX)).await?;
    let err = cart_service::add_to_cart(&state, &user.id, add(&product.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)), "got {err:?}");

    let entries = cart_service::list_cart(&state, &user.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item.quantity, i32::MAX);
    Ok(())
}

#[tokio::test]
async fn one_cart_and_wishlist_row_per_pair() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("pair"), "pw").await?;
    let product = create_product(&state, "Plate", 6.0).await?;

    cart_service::add_to_cart(&state, &user.id, add(&product.id, 1)).await?;
    let duplicate = cart::ActiveModel {
        id: NotSet,
        user_id: Set(user.id.clone()),
        product_id: Set(product.id.clone()),
        quantity: Set(4),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::from)
    .unwrap_err();
    assert!(
        matches!(duplicate, AppError::UniquenessViolation(_)),
        "got {duplicate:?}"
    );

    wishlist_service::add_to_wishlist(&state, &user.id, &product.id).await?;
    let duplicate = wishlist::ActiveModel {
        id: NotSet,
        user_id: Set(user.id.clone()),
        product_id: Set(product.id.clone()),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::from)
    .unwrap_err();
    assert!(
        matches!(duplicate, AppError::UniquenessViolation(_)),
        "got {duplicate:?}"
    );

    let item = cart_service::set_quantity(&state, &user.id, &product.id, 9).await?;
    assert_eq!(item.quantity, 9);
    assert_eq!(cart_service::list_cart(&state, &user.id).await?.len(), 1);
    assert_eq!(
        wishlist_service::list_wishlist(&state, &user.id).await?,
        vec![product]
    );
    Ok(())
}

#[tokio::test]
async fn cart_entity_defaults_id_and_quantity_per_row() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("defaults"), "pw").await?;
    let cup = create_product(&state, "Cup", 3.0).await?;
    let bowl = create_product(&state, "Bowl", 4.0).await?;

    let mut ids = Vec::new();
    for product_id in [&cup.id, &bowl.id] {
        let row = cart::ActiveModel {
            id: NotSet,
            user_id: Set(user.id.clone()),
            product_id: Set(product_id.clone()),
            quantity: NotSet,
        }
        .insert(&state.orm)
        .await?;
        assert_eq!(row.quantity, 1);
        ids.push(row.id);
    }
    assert_ne!(ids[0], ids[1]);

    let products = cart_service::cart_products(&state, &user.id).await?;
    assert_eq!(products, vec![bowl, cup]);
    Ok(())
}

#[tokio::test]
async fn set_quantity_and_remove() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("qty"), "pw").await?;
    let product = create_product(&state, "Spoon", 1.5).await?;

    let missing = cart_service::set_quantity(&state, &user.id, &product.id, 2).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    let stranger = cart_service::set_quantity(&state, "no-such-user", &product.id, 2).await;
    assert!(matches!(stranger, Err(AppError::NotFound)));

    cart_service::add_to_cart(&state, &user.id, add(&product.id, 1)).await?;
    let item = cart_service::set_quantity(&state, &user.id, &product.id, 7).await?;
    assert_eq!(item.quantity, 7);

    cart_service::remove_from_cart(&state, &user.id, &product.id).await?;
    assert!(cart_service::list_cart(&state, &user.id).await?.is_empty());
    assert!(matches!(
        cart_service::remove_from_cart(&state, &user.id, &product.id).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn wishlist_is_idempotent_and_checked() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, &unique_email("wish"), "pw").await?;
    let book = create_product(&state, "Book", 15.0).await?;
    let atlas = create_product(&state, "Atlas", 45.0).await?;

    let first = wishlist_service::add_to_wishlist(&state, &user.id, &book.id).await?;
    let again = wishlist_service::add_to_wishlist(&state, &user.id, &book.id).await?;
    assert_eq!(first, again);
    wishlist_service::add_to_wishlist(&state, &user.id, &atlas.id).await?;

    let products = wishlist_service::list_wishlist(&state, &user.id).await?;
    assert_eq!(products, vec![atlas.clone(), book.clone()]);

    wishlist_service::remove_from_wishlist(&state, &user.id, &book.id).await?;
    assert_eq!(
        wishlist_service::list_wishlist(&state, &user.id).await?,
        vec![atlas]
    );

    let err = wishlist_service::add_to_wishlist(&state, &user.id, "no-such-product")
        .await
        .unwrap_err();
    assert!(
        matches!(err, AppError::ReferentialIntegrityViolation(_)),
        "got {err:?}"
    );
    Ok(())
}
