use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("uq_cart_user_product")
                    .table(Cart::Table)
                    .col(Cart::UserId)
                    .col(Cart::ProductId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_wishlist_user_product")
                    .table(Wishlist::Table)
                    .col(Wishlist::UserId)
                    .col(Wishlist::ProductId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_wishlist_user_product")
                    .table(Wishlist::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_cart_user_product")
                    .table(Cart::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Cart {
    Table,
    UserId,
    ProductId,
}

#[derive(DeriveIden)]
enum Wishlist {
    Table,
    UserId,
    ProductId,
}
