use actix_web::{HttpResponse, web};
use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::config::AppConfig;
use crate::db::bids as bid_db;
use crate::db::jobs as job_db;
use crate::error::ServiceError;
use crate::models::bids::{CreateBid, PlaceBid, UpdateBidStatus};

/// POST /api/bids — submit a bid on a job.
///
/// The job must exist, the owner cannot bid on their own post, the job's
/// deadline must not have passed, and each bidder gets one bid per job.
/// Insert and counter increment commit together or not at all.
pub async fn place_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    body: web::Json<PlaceBid>,
) -> Result<HttpResponse, ServiceError> {
    let bidder_email = user.0.email;
    let body = body.into_inner();

    // 1. Verify the job exists.
    let job = job_db::get_job_by_id(db.get_ref(), body.job_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Job {} not found", body.job_id)))?;

    // 2. Buyers cannot bid on their own job post.
    if bidder_email == job.buyer_email {
        return Err(ServiceError::invalid_request(
            "You cannot bid on your own job post",
        ));
    }

    // 3. Bidding closes once the deadline is strictly in the past.
    if job.deadline_passed(Utc::now()) {
        return Err(ServiceError::DeadlinePassed);
    }

    // 4. One bid per bidder per job.
    if bid_db::bid_exists_for_job_and_bidder(db.get_ref(), job.id, &bidder_email).await? {
        return Err(ServiceError::DuplicateBid);
    }

    // 5. Price-range check, off unless configured on.
    if config.enforce_bid_price_range && !job.accepts_price(body.price) {
        return Err(ServiceError::invalid_request(format!(
            "Bid price must be between {} and {}",
            job.min_price, job.max_price
        )));
    }

    // 6. Insert the bid and bump the job's counter as one unit.
    let input = CreateBid {
        job_id: job.id,
        price: body.price,
        comment: body.comment,
        deadline: body.deadline,
        bidder_email,
        buyer_email: job.buyer_email,
        title: job.title,
        category: job.category,
    };

    let txn = db.begin().await.map_err(ServiceError::Database)?;

    let bid = match bid_db::insert_bid(&txn, input).await {
        Ok(bid) => bid,
        // The unique (job_id, bidder_email) index catches concurrent
        // submissions that both passed the duplicate check.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(ServiceError::DuplicateBid);
        }
        Err(e) => return Err(ServiceError::Database(e)),
    };

    let counter = job_db::increment_bid_count(&txn, job.id).await?;

    txn.commit().await.map_err(ServiceError::Database)?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "bid": bid,
        "job_updated": counter.rows_affected,
    })))
}

/// GET /api/bids/bidder/{email} — bids the given user submitted. Callers
/// can only read their own listing.
pub async fn get_bids_by_bidder(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let email = path.into_inner();

    if user.0.email != email {
        return Err(ServiceError::forbidden("You can only view your own bids"));
    }

    let bids = bid_db::get_bids_by_bidder_email(db.get_ref(), &email).await?;

    Ok(HttpResponse::Ok().json(bids))
}

/// GET /api/bids/requests/{email} — bids received against the given
/// buyer's job posts. Callers can only read their own listing.
pub async fn get_bid_requests(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let email = path.into_inner();

    if user.0.email != email {
        return Err(ServiceError::forbidden(
            "You can only view bids on your own job posts",
        ));
    }

    let bids = bid_db::get_bids_by_buyer_email(db.get_ref(), &email).await?;

    Ok(HttpResponse::Ok().json(bids))
}

/// PATCH /api/bids/{id}/status — the job owner moves a bid through its
/// lifecycle. The transition rules live on `BidStatus`; the storage write
/// below them is an unconditional set.
pub async fn update_status(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBidStatus>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();

    let bid = bid_db::get_bid_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Bid {id} not found")))?;

    if bid.buyer_email != user.0.email {
        return Err(ServiceError::forbidden(
            "Only the job owner can update a bid's status",
        ));
    }

    let requested = body.into_inner().status;
    if !bid.status.permits_transition_to(&requested) {
        return Err(ServiceError::InvalidTransition);
    }

    let updated = bid_db::update_bid_status(db.get_ref(), id, requested).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/bids/{id} — a bidder withdraws their bid. The parent job's
/// bid counter is monotonic and stays where it is.
pub async fn delete_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();

    let bid = bid_db::get_bid_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Bid {id} not found")))?;

    if bid.bidder_email != user.0.email {
        return Err(ServiceError::forbidden(
            "You can only withdraw your own bids",
        ));
    }

    let result = bid_db::delete_bid(db.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "deleted": result.rows_affected,
    })))
}
