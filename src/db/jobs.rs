use sea_orm::sea_query::{Expr, ExprTrait, extension::postgres::PgExpr};
use sea_orm::*;
use uuid::Uuid;

use crate::models::jobs::{self, CreateJob, JobListQuery, UpdateJob};

/// Insert a new job. The bid counter always starts at zero, whatever the
/// client sent.
pub async fn insert_job(db: &DatabaseConnection, input: CreateJob) -> Result<jobs::Model, DbErr> {
    let new_job = jobs::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        category: Set(input.category),
        buyer_email: Set(input.buyer.email),
        buyer_name: Set(input.buyer.name),
        buyer_photo: Set(input.buyer.photo),
        min_price: Set(input.min_price),
        max_price: Set(input.max_price),
        deadline: Set(input.deadline),
        bid_count: Set(0),
        created_at: Set(chrono::Utc::now()),
    };

    new_job.insert(db).await
}

/// Fetch a single job by ID.
pub async fn get_job_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<jobs::Model>, DbErr> {
    jobs::Entity::find_by_id(id).one(db).await
}

/// List jobs, optionally narrowed by a case-insensitive title substring and
/// a category, ordered by deadline when a sort direction is given.
pub async fn list_jobs(
    db: &DatabaseConnection,
    query: &JobListQuery,
) -> Result<Vec<jobs::Model>, DbErr> {
    let mut find = jobs::Entity::find();

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        find = find.filter(Expr::col(jobs::Column::Title).ilike(format!("%{search}%")));
    }

    if let Some(filter) = query.filter.as_deref().filter(|s| !s.is_empty()) {
        find = find.filter(jobs::Column::Category.eq(filter));
    }

    // The client's toggle only ever sends "asc" or "desc"; anything else
    // non-empty sorts descending, as the original server did.
    find = match query.sort.as_deref().filter(|s| !s.is_empty()) {
        Some("asc") => find.order_by_asc(jobs::Column::Deadline),
        Some(_) => find.order_by_desc(jobs::Column::Deadline),
        None => find,
    };

    find.all(db).await
}

/// Fetch all jobs posted by a buyer.
pub async fn get_jobs_by_buyer_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Vec<jobs::Model>, DbErr> {
    jobs::Entity::find()
        .filter(jobs::Column::BuyerEmail.eq(email))
        .all(db)
        .await
}

/// Replace every mutable field of a job, or insert a fresh row with the
/// caller's id when none exists (upsert).
///
/// `bid_count` is untouched on the update path so an edit never resets it.
pub async fn replace_or_insert_job(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateJob,
) -> Result<jobs::Model, DbErr> {
    match jobs::Entity::find_by_id(id).one(db).await? {
        Some(existing) => {
            let mut active: jobs::ActiveModel = existing.into();
            active.title = Set(input.title);
            active.description = Set(input.description);
            active.category = Set(input.category);
            active.buyer_email = Set(input.buyer.email);
            active.buyer_name = Set(input.buyer.name);
            active.buyer_photo = Set(input.buyer.photo);
            active.min_price = Set(input.min_price);
            active.max_price = Set(input.max_price);
            active.deadline = Set(input.deadline);

            active.update(db).await
        }
        None => {
            let new_job = jobs::ActiveModel {
                id: Set(id),
                title: Set(input.title),
                description: Set(input.description),
                category: Set(input.category),
                buyer_email: Set(input.buyer.email),
                buyer_name: Set(input.buyer.name),
                buyer_photo: Set(input.buyer.photo),
                min_price: Set(input.min_price),
                max_price: Set(input.max_price),
                deadline: Set(input.deadline),
                bid_count: Set(0),
                created_at: Set(chrono::Utc::now()),
            };

            new_job.insert(db).await
        }
    }
}

/// Delete a job by ID.
pub async fn delete_job(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    jobs::Entity::delete_by_id(id).exec(db).await
}

/// Add one to a job's bid counter with a single SQL expression.
///
/// Generic over the connection so it can run inside the bid-submission
/// transaction.
pub async fn increment_bid_count<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<UpdateResult, DbErr> {
    jobs::Entity::update_many()
        .col_expr(
            jobs::Column::BidCount,
            Expr::col(jobs::Column::BidCount).add(1),
        )
        .filter(jobs::Column::Id.eq(id))
        .exec(db)
        .await
}
