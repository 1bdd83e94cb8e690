pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_jobs_table;
mod m20250301_000002_create_bids_table;
mod m20250305_000001_add_unique_job_bidder_to_bids;
mod m20250310_000001_add_view_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_jobs_table::Migration),
            Box::new(m20250301_000002_create_bids_table::Migration),
            Box::new(m20250305_000001_add_unique_job_bidder_to_bids::Migration),
            Box::new(m20250310_000001_add_view_indexes::Migration),
        ]
    }
}
