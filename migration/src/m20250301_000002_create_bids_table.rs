use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `bids` table and its columns.
///
/// `job_id` is deliberately not a foreign key: the reference is validated in
/// the service layer, and bids on a deleted job are kept as historical rows.
#[derive(DeriveIden)]
enum Bids {
    Table,
    Id,
    JobId,
    Price,
    Comment,
    Deadline,
    BidderEmail,
    BuyerEmail,
    Title,
    Category,
    Status,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bids::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bids::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bids::JobId).uuid().not_null())
                    .col(ColumnDef::new(Bids::Price).double().not_null())
                    .col(ColumnDef::new(Bids::Comment).text())
                    .col(
                        ColumnDef::new(Bids::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bids::BidderEmail).string().not_null())
                    .col(ColumnDef::new(Bids::BuyerEmail).string().not_null())
                    .col(ColumnDef::new(Bids::Title).string().not_null())
                    .col(ColumnDef::new(Bids::Category).string().not_null())
                    .col(ColumnDef::new(Bids::Status).string().not_null())
                    .col(
                        ColumnDef::new(Bids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bids::Table).to_owned())
            .await
    }
}
