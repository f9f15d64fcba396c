// src/core/store.rs
//! Seam between the view controller and whatever serves the jobs

use std::future::Future;

use super::error::StoreResult;
use crate::types::{FilterCriteria, HealthStatus, Job, JobDraft, JobId, JobPatch};

/// Where a listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Remote,
    /// The API was unavailable; the seed dataset was filtered locally
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub jobs: Vec<Job>,
    pub source: ListingSource,
}

impl Listing {
    pub fn is_degraded(&self) -> bool {
        self.source == ListingSource::Fallback
    }
}

/// CRUD access to the job collection.
///
/// `list` and `health` never fail; writes always report their failure.
pub trait JobStore {
    fn list(&self, criteria: &FilterCriteria) -> impl Future<Output = Listing> + Send;

    fn get(&self, id: JobId) -> impl Future<Output = StoreResult<Option<Job>>> + Send;

    fn create(&self, draft: &JobDraft) -> impl Future<Output = StoreResult<Job>> + Send;

    fn update(&self, id: JobId, patch: &JobPatch)
        -> impl Future<Output = StoreResult<Job>> + Send;

    fn delete(&self, id: JobId) -> impl Future<Output = StoreResult<bool>> + Send;

    fn health(&self) -> impl Future<Output = HealthStatus> + Send;
}
