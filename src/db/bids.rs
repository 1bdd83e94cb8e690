use sea_orm::*;
use uuid::Uuid;

use crate::models::bids::{self, BidStatus, CreateBid};

/// Insert a new bid (defaults to Pending status).
///
/// Generic over the connection so it can run inside the bid-submission
/// transaction alongside the job counter increment.
pub async fn insert_bid<C: ConnectionTrait>(
    db: &C,
    input: CreateBid,
) -> Result<bids::Model, DbErr> {
    let new_bid = bids::ActiveModel {
        id: Set(Uuid::new_v4()),
        job_id: Set(input.job_id),
        price: Set(input.price),
        comment: Set(input.comment),
        deadline: Set(input.deadline),
        bidder_email: Set(input.bidder_email),
        buyer_email: Set(input.buyer_email),
        title: Set(input.title),
        category: Set(input.category),
        status: Set(BidStatus::Pending),
        created_at: Set(chrono::Utc::now()),
    };

    new_bid.insert(db).await
}

/// Whether a bidder already has a bid on a job.
pub async fn bid_exists_for_job_and_bidder(
    db: &DatabaseConnection,
    job_id: Uuid,
    bidder_email: &str,
) -> Result<bool, DbErr> {
    Ok(bids::Entity::find()
        .filter(bids::Column::JobId.eq(job_id))
        .filter(bids::Column::BidderEmail.eq(bidder_email))
        .one(db)
        .await?
        .is_some())
}

/// Fetch a single bid by ID.
pub async fn get_bid_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<bids::Model>, DbErr> {
    bids::Entity::find_by_id(id).one(db).await
}

/// Fetch all bids a user has submitted.
pub async fn get_bids_by_bidder_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::BidderEmail.eq(email))
        .all(db)
        .await
}

/// Fetch all bids received against a buyer's jobs (matched on the
/// owner email denormalized into each bid at submission time).
pub async fn get_bids_by_buyer_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::BuyerEmail.eq(email))
        .all(db)
        .await
}

/// Set a bid's status unconditionally. Transition rules are enforced by the
/// caller, not here.
pub async fn update_bid_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: BidStatus,
) -> Result<bids::Model, DbErr> {
    let bid = bids::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Bid not found".to_string()))?;

    let mut active: bids::ActiveModel = bid.into();
    active.status = Set(status);

    active.update(db).await
}

/// Delete a bid by ID. The parent job's bid counter is left as is.
pub async fn delete_bid(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    bids::Entity::delete_by_id(id).exec(db).await
}
