use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Assigned by the database on insert.
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shop_list_products::Entity")]
    ShopListProducts,
    #[sea_orm(has_many = "super::users_shop_list::Entity")]
    UsersShopList,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::shop_list_products::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shop_list_products::Relation::ShopList.def().rev())
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_shop_list::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_shop_list::Relation::ShopList.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
