pub mod bids;
pub mod jobs;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;

/// Open the SeaORM connection pool from the `DATABASE_URL` env var.
///
/// The pool is constructed once at startup and handed to the HTTP layer as
/// shared app data; it closes when the server shuts down.
pub async fn create_pool() -> Result<DatabaseConnection, DbErr> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url).await
}
