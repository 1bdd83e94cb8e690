use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Job categories, stored with the same display strings the clients submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Web Development")]
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[sea_orm(string_value = "Graphics Design")]
    #[serde(rename = "Graphics Design")]
    GraphicsDesign,
    #[sea_orm(string_value = "Digital Marketing")]
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
}

/// SeaORM entity for the `jobs` table.
///
/// The buyer identity snapshot is flattened into three columns; the wire
/// format nests it back into a `buyer` object (see [`JobResponse`]).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Category,
    pub buyer_email: String,
    pub buyer_name: String,
    pub buyer_photo: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub min_price: f64,
    #[sea_orm(column_type = "Double")]
    pub max_price: f64,
    pub deadline: DateTimeUtc,
    pub bid_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether `price` falls inside the advertised range, bounds inclusive.
    pub fn accepts_price(&self, price: f64) -> bool {
        price >= self.min_price && price <= self.max_price
    }

    /// Bidding closes once `now` is strictly after the deadline; a bid at
    /// the exact deadline instant still counts.
    pub fn deadline_passed(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        now > self.deadline
    }
}

// ── DTOs ──

/// Buyer identity as the clients send and read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub email: String,
    pub name: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub buyer: Buyer,
    pub min_price: f64,
    pub max_price: f64,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

/// Full-replace payload for `PUT /api/jobs/{id}`.
///
/// Every mutable field is required; `bid_count` is not among them, so an
/// edit can never reset the counter.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJob {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub buyer: Buyer,
    pub min_price: f64,
    pub max_price: f64,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

/// Query parameters for the job listing. All three arrive as raw strings
/// from the browser and an empty value means "not set", so they stay
/// strings here and the query layer interprets them.
#[derive(Debug, Clone, Deserialize)]
pub struct JobListQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// Wire representation of a job, with the buyer snapshot nested back into
/// the object shape the clients were built against.
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub buyer: Buyer,
    pub min_price: f64,
    pub max_price: f64,
    pub deadline: DateTimeUtc,
    pub bid_count: i32,
    pub created_at: DateTimeUtc,
}

impl From<Model> for JobResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            buyer: Buyer {
                email: m.buyer_email,
                name: m.buyer_name,
                photo: m.buyer_photo,
            },
            min_price: m.min_price,
            max_price: m.max_price,
            deadline: m.deadline,
            bid_count: m.bid_count,
            created_at: m.created_at,
        }
    }
}
