///! Tests for the bid-submission guard rules and the wire shapes the
///! clients rely on. No running server or database is needed.
///!
///! Run with: `cargo test --test validation_test`
use chrono::{Duration, Utc};
use uuid::Uuid;

use jobsphere_backend::models::bids::{BidStatus, PlaceBid, UpdateBidStatus};
// Entity models are plain structs, so tests build them directly.
use jobsphere_backend::models::jobs::{self as jobs_entity, Category, CreateJob, JobResponse};

fn sample_job(min_price: f64, max_price: f64) -> jobs_entity::Model {
    jobs_entity::Model {
        id: Uuid::new_v4(),
        title: "Logo Design".to_string(),
        description: "Design a company logo".to_string(),
        category: Category::GraphicsDesign,
        buyer_email: "b@x.com".to_string(),
        buyer_name: "Buyer".to_string(),
        buyer_photo: None,
        min_price,
        max_price,
        deadline: Utc::now() + Duration::days(7),
        bid_count: 0,
        created_at: Utc::now(),
    }
}

// ── Price-range rule ──

#[test]
fn test_price_bounds_are_inclusive() {
    let job = sample_job(50.0, 200.0);

    assert!(job.accepts_price(50.0));
    assert!(job.accepts_price(100.0));
    assert!(job.accepts_price(200.0));
}

#[test]
fn test_out_of_range_prices_are_refused() {
    let job = sample_job(50.0, 200.0);

    assert!(!job.accepts_price(49.99));
    assert!(!job.accepts_price(200.01));
    assert!(!job.accepts_price(0.0));
}

// ── Deadline rule ──

#[test]
fn test_deadline_comparison_is_strict() {
    let job = sample_job(50.0, 200.0);
    let deadline = job.deadline;

    // A bid at the exact deadline instant still counts.
    assert!(!job.deadline_passed(deadline));
    assert!(!job.deadline_passed(deadline - Duration::seconds(1)));
    assert!(job.deadline_passed(deadline + Duration::seconds(1)));
}

// ── Wire shapes ──

#[test]
fn test_category_uses_display_strings() {
    assert_eq!(
        serde_json::to_value(Category::WebDevelopment).unwrap(),
        serde_json::json!("Web Development")
    );
    assert_eq!(
        serde_json::from_value::<Category>(serde_json::json!("Graphics Design")).unwrap(),
        Category::GraphicsDesign
    );
    assert_eq!(
        serde_json::from_value::<Category>(serde_json::json!("Digital Marketing")).unwrap(),
        Category::DigitalMarketing
    );
}

#[test]
fn test_status_uses_display_strings() {
    assert_eq!(
        serde_json::to_value(BidStatus::InProgress).unwrap(),
        serde_json::json!("In Progress")
    );

    let parsed: UpdateBidStatus =
        serde_json::from_value(serde_json::json!({ "status": "In Progress" })).unwrap();
    assert_eq!(parsed.status, BidStatus::InProgress);
}

#[test]
fn test_job_response_nests_the_buyer() {
    let job = sample_job(50.0, 200.0);
    let id = job.id;

    let value = serde_json::to_value(JobResponse::from(job)).unwrap();

    assert_eq!(value["id"], serde_json::json!(id));
    assert_eq!(value["buyer"]["email"], serde_json::json!("b@x.com"));
    assert_eq!(value["buyer"]["name"], serde_json::json!("Buyer"));
    assert_eq!(value["bid_count"], serde_json::json!(0));
}

#[test]
fn test_create_job_ignores_a_client_supplied_bid_count() {
    let payload = serde_json::json!({
        "title": "Logo Design",
        "description": "Design a company logo",
        "category": "Graphics Design",
        "buyer": { "email": "b@x.com", "name": "Buyer", "photo": null },
        "min_price": 50.0,
        "max_price": 200.0,
        "deadline": "2026-12-01T00:00:00Z",
        "bid_count": 7,
    });

    // The field is not part of the input type; the counter always starts
    // at zero server-side.
    let parsed: CreateJob = serde_json::from_value(payload).unwrap();
    assert_eq!(parsed.title, "Logo Design");
    assert_eq!(parsed.buyer.email, "b@x.com");
}

#[test]
fn test_place_bid_comment_is_optional() {
    let job_id = Uuid::new_v4();
    let payload = serde_json::json!({
        "job_id": job_id,
        "price": 100.0,
        "deadline": "2026-11-15T00:00:00Z",
    });

    let parsed: PlaceBid = serde_json::from_value(payload).unwrap();
    assert_eq!(parsed.job_id, job_id);
    assert!(parsed.comment.is_none());
}
