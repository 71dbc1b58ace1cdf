use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::users::{NewUser, UpdateUser},
    entity::{
        new_id,
        shop_list::{Column as ShopListCol, Entity as ShopLists},
        users::{ActiveModel, Column, Entity as Users, Model as UserModel},
        users_shop_list::{
            ActiveModel as UserShopListActive, Column as UserShopListCol,
            Entity as UsersShopList,
        },
    },
    error::{AppError, AppResult},
    models::{ShopList, User},
    state::AppState,
};

pub async fn create_user(state: &AppState, payload: NewUser) -> AppResult<User> {
    let NewUser {
        id,
        first_name,
        last_name,
        email,
        password,
        is_admin,
    } = payload;

    let mut active = ActiveModel {
        id: Set(id.unwrap_or_else(new_id)),
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email),
        is_admin: Set(is_admin),
        ..Default::default()
    };
    active.set_password(&password)?;

    let user = active.insert(&state.orm).await?;
    tracing::info!(user_id = %user.id, "user created");
    Ok(user.into())
}

pub async fn get_user(state: &AppState, id: &str) -> AppResult<User> {
    Ok(find_model(state, id).await?.into())
}

pub async fn find_by_email(state: &AppState, email: &str) -> AppResult<Option<User>> {
    Ok(find_model_by_email(state, email).await?.map(User::from))
}

pub async fn update_user(state: &AppState, id: &str, payload: UpdateUser) -> AppResult<User> {
    let existing = find_model(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(is_admin) = payload.is_admin {
        active.is_admin = Set(is_admin);
    }

    let user = active.update(&state.orm).await?;
    tracing::info!(user_id = %user.id, "user updated");
    Ok(user.into())
}

pub async fn change_password(state: &AppState, id: &str, new_password: &str) -> AppResult<()> {
    let existing = find_model(state, id).await?;

    let mut active: ActiveModel = existing.into();
    active.set_password(new_password)?;
    active.update(&state.orm).await?;

    tracing::info!(user_id = %id, "password changed");
    Ok(())
}

pub async fn delete_user(state: &AppState, id: &str) -> AppResult<()> {
    let result = Users::delete_by_id(id.to_owned()).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id = %id, "user deleted");
    Ok(())
}

/// Link a shop list to a user. Linking an existing pair is a no-op.
pub async fn add_shop_list(state: &AppState, user_id: &str, shop_list_id: &str) -> AppResult<()> {
    let link = UserShopListActive {
        user_id: Set(user_id.to_owned()),
        shop_list_id: Set(shop_list_id.to_owned()),
    };
    let inserted = UsersShopList::insert(link)
        .on_conflict(
            OnConflict::columns([UserShopListCol::UserId, UserShopListCol::ShopListId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&state.orm)
        .await?;

    tracing::info!(user_id, shop_list_id, inserted, "shop list linked to user");
    Ok(())
}

pub async fn remove_shop_list(
    state: &AppState,
    user_id: &str,
    shop_list_id: &str,
) -> AppResult<()> {
    let result = UsersShopList::delete_many()
        .filter(UserShopListCol::UserId.eq(user_id))
        .filter(UserShopListCol::ShopListId.eq(shop_list_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id, shop_list_id, "shop list unlinked from user");
    Ok(())
}

pub async fn list_shop_lists(state: &AppState, user_id: &str) -> AppResult<Vec<ShopList>> {
    let user = find_model(state, user_id).await?;
    let lists = user
        .find_related(ShopLists)
        .order_by_desc(ShopListCol::Date)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ShopList::from)
        .collect();
    Ok(lists)
}

pub(crate) async fn find_model(state: &AppState, id: &str) -> AppResult<UserModel> {
    Users::find_by_id(id.to_owned())
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}

pub(crate) async fn find_model_by_email(
    state: &AppState,
    email: &str,
) -> AppResult<Option<UserModel>> {
    Ok(Users::find()
        .filter(Column::Email.eq(email))
        .one(&state.orm)
        .await?)
}
