pub mod auth;
pub mod bids;
pub mod jobs;

use actix_web::{Responder, web};

/// GET / — liveness greeting.
pub async fn index() -> impl Responder {
    "Hello from JobSphere Server...."
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (cookie issuance, open) ──
    cfg.service(
        web::scope("/auth")
            .route("/token", web::post().to(auth::issue_token))
            .route("/logout", web::get().to(auth::logout)),
    );

    // ── Job routes (browsing is public, mutation requires a token) ──
    cfg.service(
        web::scope("/jobs")
            .route("", web::get().to(jobs::list_jobs))
            .route("", web::post().to(jobs::create_job))
            .route("/buyer/{email}", web::get().to(jobs::get_jobs_by_buyer))
            .route("/{id}", web::get().to(jobs::get_job))
            .route("/{id}", web::put().to(jobs::update_job))
            .route("/{id}", web::delete().to(jobs::delete_job)),
    );

    // ── Bid routes (all require a token) ──
    cfg.service(
        web::scope("/bids")
            .route("", web::post().to(bids::place_bid))
            .route("/bidder/{email}", web::get().to(bids::get_bids_by_bidder))
            .route("/requests/{email}", web::get().to(bids::get_bid_requests))
            .route("/{id}", web::delete().to(bids::delete_bid))
            .route("/{id}/status", web::patch().to(bids::update_status)),
    );
}
