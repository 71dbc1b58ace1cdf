use std::fmt;

use sea_orm::{DeriveValueType, Linked, Set};
use sea_orm::entity::prelude::*;

use crate::{
    auth::{TokenIssuer, hash_password, verify_password},
    dto::auth::TokenPair,
    error::AppResult,
};

/// Returned wherever the password is read back.
pub const PASSWORD_SENTINEL: &str = "Don't use this";

/// An argon2 PHC string. Only this crate can read it, and `Debug` never
/// prints it, including through the generated `ActiveModel`.
#[derive(Clone, PartialEq, Eq, DeriveValueType)]
pub struct StoredHash(String);

impl StoredHash {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoredHash(<redacted>)")
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub(crate) password_hash: StoredHash,
    pub is_admin: bool,
}

impl Model {
    /// The password is write-only; this never yields the stored hash.
    pub fn password(&self) -> &'static str {
        PASSWORD_SENTINEL
    }

    /// Verify `candidate` against the stored hash. A mismatch is `Ok(None)`,
    /// not an error.
    pub fn get_tokens(&self, candidate: &str, issuer: &TokenIssuer) -> AppResult<Option<TokenPair>> {
        if !verify_password(self.password_hash.as_str(), candidate)? {
            return Ok(None);
        }
        issuer.issue_pair(&self.id).map(Some)
    }
}

impl ActiveModel {
    /// Hash `plaintext` and stage the hash for the next save.
    pub fn set_password(&mut self, plaintext: &str) -> AppResult<()> {
        self.password_hash = Set(StoredHash(hash_password(plaintext)?));
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart::Entity")]
    Cart,
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlist,
    #[sea_orm(has_many = "super::users_shop_list::Entity")]
    UsersShopList,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::shop_list::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_shop_list::Relation::ShopList.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_shop_list::Relation::User.def().rev())
    }
}

// Cart contents.
impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::cart::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cart::Relation::User.def().rev())
    }
}

/// Products on a user's wishlist.
#[derive(Debug)]
pub struct WishlistProducts;

impl Linked for WishlistProducts {
    type FromEntity = Entity;
    type ToEntity = super::products::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::wishlist::Relation::User.def().rev(),
            super::wishlist::Relation::Product.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use sea_orm::IntoActiveModel;

    use super::*;

    fn user_with_password(plaintext: &str) -> Model {
        Model {
            id: "u1".into(),
            first_name: None,
            last_name: None,
            email: "a@x.com".into(),
            password_hash: StoredHash(hash_password(plaintext).unwrap()),
            is_admin: false,
        }
    }

    #[test]
    fn password_reads_back_as_sentinel() {
        let user = user_with_password("secret");
        assert_eq!(user.password(), PASSWORD_SENTINEL);
        assert_ne!(user.password(), user.password_hash.as_str());
    }

    #[test]
    fn debug_output_redacts_hash() {
        let user = user_with_password("secret");
        let rendered = format!("{user:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(user.password_hash.as_str()));
    }

    #[test]
    fn active_model_debug_redacts_hash() {
        let user = user_with_password("secret");
        let hash = user.password_hash.as_str().to_owned();

        let rendered = format!("{:?}", user.into_active_model());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(&hash));

        let mut staged = ActiveModel::new();
        staged.set_password("other").unwrap();
        assert!(!format!("{staged:?}").contains("$argon2"));
    }

    #[test]
    fn set_password_stages_a_hash() {
        let mut active = ActiveModel::new();
        active.set_password("secret").unwrap();
        let staged = active.password_hash.clone().unwrap();
        assert_ne!(staged.as_str(), "secret");
        assert!(verify_password(staged.as_str(), "secret").unwrap());
    }

    #[test]
    fn tokens_only_for_matching_password() {
        let issuer = TokenIssuer::new("test-secret", Duration::minutes(15), Duration::days(30));
        let user = user_with_password("secret");

        let pair = user.get_tokens("secret", &issuer).unwrap().expect("tokens");
        assert_ne!(pair.access_token, pair.refresh_token);
        assert!(user.get_tokens("wrong", &issuer).unwrap().is_none());
    }
}
