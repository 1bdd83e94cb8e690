use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bid lifecycle status, stored with the display strings the clients render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BidStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

impl BidStatus {
    /// Whether a bid currently in `self` may be moved to `next`.
    ///
    /// Moving to the status a bid already holds is never permitted, and
    /// `Completed` is terminal. A rejected bid may still be taken into
    /// progress, but nothing re-enters `Pending` and only an in-progress
    /// bid can complete.
    pub fn permits_transition_to(&self, next: &BidStatus) -> bool {
        match next {
            BidStatus::InProgress => {
                *self != BidStatus::InProgress && *self != BidStatus::Completed
            }
            BidStatus::Rejected => *self != BidStatus::Rejected && *self != BidStatus::Completed,
            BidStatus::Completed => *self == BidStatus::InProgress,
            BidStatus::Pending => false,
        }
    }
}

/// SeaORM entity for the `bids` table.
///
/// `title`, `category` and `buyer_email` are copied from the job at
/// submission time so the list views need no join; they are point-in-time
/// snapshots and later job edits do not touch them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bids")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub job_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub comment: Option<String>,
    pub deadline: DateTimeUtc,
    pub bidder_email: String,
    pub buyer_email: String,
    pub title: String,
    pub category: super::jobs::Category,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /api/bids`. The bidder identity comes from the
/// authenticated caller, everything denormalized comes from the job.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceBid {
    pub job_id: Uuid,
    pub price: f64,
    pub comment: Option<String>,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

/// Request body for `PATCH /api/bids/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBidStatus {
    pub status: BidStatus,
}

/// Fully assembled bid, built by the submission handler once the job has
/// been loaded and the denormalized fields resolved.
#[derive(Debug, Clone)]
pub struct CreateBid {
    pub job_id: Uuid,
    pub price: f64,
    pub comment: Option<String>,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub bidder_email: String,
    pub buyer_email: String,
    pub title: String,
    pub category: super::jobs::Category,
}
