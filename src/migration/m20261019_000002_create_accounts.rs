use sea_orm_migration::prelude::*;

use super::m20261019_000001_create_catalog::{Products, ShopList};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string_len(100).not_null().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string_len(100).null())
                    .col(ColumnDef::new(Users::LastName).string_len(100).null())
                    .col(ColumnDef::new(Users::Email).string_len(50).not_null().unique_key())
                    // PHC strings from argon2 run to roughly 100 chars.
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .col(ColumnDef::new(Users::IsAdmin).boolean().not_null().default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cart::Id).string_len(100).not_null().primary_key())
                    .col(ColumnDef::new(Cart::UserId).string_len(100).not_null())
                    .col(ColumnDef::new(Cart::ProductId).string_len(100).not_null())
                    .col(ColumnDef::new(Cart::Quantity).integer().not_null().default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user")
                            .from(Cart::Table, Cart::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_product")
                            .from(Cart::Table, Cart::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_user_id")
                    .table(Cart::Table)
                    .col(Cart::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Wishlist::Id).string_len(100).not_null().primary_key())
                    .col(ColumnDef::new(Wishlist::UserId).string_len(100).not_null())
                    .col(ColumnDef::new(Wishlist::ProductId).string_len(100).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_user")
                            .from(Wishlist::Table, Wishlist::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_product")
                            .from(Wishlist::Table, Wishlist::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wishlist_user_id")
                    .table(Wishlist::Table)
                    .col(Wishlist::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsersShopList::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UsersShopList::UserId).string_len(100).not_null())
                    .col(ColumnDef::new(UsersShopList::ShopListId).string_len(100).not_null())
                    .primary_key(
                        Index::create()
                            .col(UsersShopList::UserId)
                            .col(UsersShopList::ShopListId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_shop_list_user")
                            .from(UsersShopList::Table, UsersShopList::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_shop_list_shop_list")
                            .from(UsersShopList::Table, UsersShopList::ShopListId)
                            .to(ShopList::Table, ShopList::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersShopList::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wishlist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    IsAdmin,
}

#[derive(DeriveIden)]
enum Cart {
    Table,
    Id,
    UserId,
    ProductId,
    Quantity,
}

#[derive(DeriveIden)]
enum Wishlist {
    Table,
    Id,
    UserId,
    ProductId,
}

#[derive(DeriveIden)]
enum UsersShopList {
    Table,
    UserId,
    ShopListId,
}
