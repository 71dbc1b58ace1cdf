use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub img_url: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart::Entity")]
    Cart,
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlist,
    #[sea_orm(has_many = "super::reviews_products::Entity")]
    ReviewsProducts,
    #[sea_orm(has_many = "super::shop_list_products::Entity")]
    ShopListProducts,
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

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        super::reviews_products::Relation::Review.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reviews_products::Relation::Product.def().rev())
    }
}

impl Related<super::shop_list::Entity> for Entity {
    fn to() -> RelationDef {
        super::shop_list_products::Relation::ShopList.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shop_list_products::Relation::Product.def().rev())
    }
}

// Users holding this product in their cart.
impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::cart::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cart::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
