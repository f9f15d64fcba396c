// src/core/mod.rs
//! Job store client and the offline data it falls back to

pub mod error;
pub mod job_client;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use job_client::JobClient;
pub use seed::seed_jobs;
pub use store::{JobStore, Listing, ListingSource};
