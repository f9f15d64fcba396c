//! Job board client: a resilient HTTP store client for the jobs API, the
//! filter/sort/aggregate engine over job collections, and a reducer-driven
//! view controller tying the two together.

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod engine;
pub mod presentation;
pub mod types;
pub mod utils;

pub use config::ClientConfig;
pub use controller::{Action, Controller, View, ViewState};
pub use crate::core::{JobClient, JobStore, Listing, ListingSource, StoreError, StoreResult};
pub use engine::{aggregate_by, compute_stats, is_recent, select_and_order, AggregateField};
pub use types::{
    Aggregate, FilterCriteria, HealthStatus, Job, JobDraft, JobId, JobPatch, JobType, SortOrder,
    Stats,
};
