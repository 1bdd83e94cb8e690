use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `jobs` table and its columns.
#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    Title,
    Description,
    Category,
    BuyerEmail,
    BuyerName,
    BuyerPhoto,
    MinPrice,
    MaxPrice,
    Deadline,
    BidCount,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Jobs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Jobs::Title).string().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::Category).string().not_null())
                    .col(ColumnDef::new(Jobs::BuyerEmail).string().not_null())
                    .col(ColumnDef::new(Jobs::BuyerName).string().not_null())
                    .col(ColumnDef::new(Jobs::BuyerPhoto).string())
                    .col(ColumnDef::new(Jobs::MinPrice).double().not_null())
                    .col(ColumnDef::new(Jobs::MaxPrice).double().not_null())
                    .col(
                        ColumnDef::new(Jobs::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::BidCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}
