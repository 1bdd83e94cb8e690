pub mod bids;
pub mod jobs;
