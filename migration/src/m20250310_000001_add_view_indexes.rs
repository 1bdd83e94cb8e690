use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Jobs {
    Table,
    BuyerEmail,
}

#[derive(DeriveIden)]
enum Bids {
    Table,
    BidderEmail,
    BuyerEmail,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on jobs.buyer_email for the my-posted-jobs view
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_buyer_email")
                    .table(Jobs::Table)
                    .col(Jobs::BuyerEmail)
                    .to_owned(),
            )
            .await?;

        // Index on bids.bidder_email for the my-bids view
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_bidder_email")
                    .table(Bids::Table)
                    .col(Bids::BidderEmail)
                    .to_owned(),
            )
            .await?;

        // Index on bids.buyer_email for the bid-requests view
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_buyer_email")
                    .table(Bids::Table)
                    .col(Bids::BuyerEmail)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_jobs_buyer_email").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_bidder_email").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_buyer_email").to_owned())
            .await?;

        Ok(())
    }
}
