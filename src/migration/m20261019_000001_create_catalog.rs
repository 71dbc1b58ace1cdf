use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reviews::Id).string_len(100).not_null().primary_key())
                    .col(ColumnDef::new(Reviews::Text).string_len(200).not_null())
                    .col(ColumnDef::new(Reviews::Rating).double().not_null())
                    .col(ColumnDef::new(Reviews::Author).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).string_len(100).not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Products::Description).string_len(200).not_null())
                    .col(ColumnDef::new(Products::ImgUrl).string_len(200).not_null())
                    .col(ColumnDef::new(Products::Price).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopList::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ShopList::Id).string_len(100).not_null().primary_key())
                    .col(
                        ColumnDef::new(ShopList::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReviewsProducts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ReviewsProducts::ProductId).string_len(100).not_null())
                    .col(ColumnDef::new(ReviewsProducts::ReviewId).string_len(100).not_null())
                    .primary_key(
                        Index::create()
                            .col(ReviewsProducts::ProductId)
                            .col(ReviewsProducts::ReviewId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_products_product")
                            .from(ReviewsProducts::Table, ReviewsProducts::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_products_review")
                            .from(ReviewsProducts::Table, ReviewsProducts::ReviewId)
                            .to(Reviews::Table, Reviews::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopListProducts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ShopListProducts::ShopListId).string_len(100).not_null())
                    .col(ColumnDef::new(ShopListProducts::ProductId).string_len(100).not_null())
                    .primary_key(
                        Index::create()
                            .col(ShopListProducts::ShopListId)
                            .col(ShopListProducts::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_list_products_shop_list")
                            .from(ShopListProducts::Table, ShopListProducts::ShopListId)
                            .to(ShopList::Table, ShopList::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_list_products_product")
                            .from(ShopListProducts::Table, ShopListProducts::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopListProducts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReviewsProducts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShopList::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    Text,
    Rating,
    Author,
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
    Description,
    ImgUrl,
    Price,
}

#[derive(DeriveIden)]
pub enum ShopList {
    Table,
    Id,
    Date,
}

#[derive(DeriveIden)]
enum ReviewsProducts {
    Table,
    ProductId,
    ReviewId,
}

#[derive(DeriveIden)]
enum ShopListProducts {
    Table,
    ShopListId,
    ProductId,
}
