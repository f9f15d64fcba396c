// src/controller/mod.rs
//! Owns the view state and mediates every read and write against the store

pub mod state;

pub use state::{reduce, Action, FormState, View, ViewState};

use tracing::{debug, info, warn};

use crate::core::{JobStore, StoreError, StoreResult};
use crate::types::{FilterCriteria, Job, JobDraft, JobId, JobPatch};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this job?";

pub struct Controller<S> {
    store: S,
    state: ViewState,
}

impl<S: JobStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a state transition without touching the store
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Replace the canonical collection with a fresh unfiltered read, then
    /// recompute the filtered listing against it.
    pub async fn load_all(&mut self) {
        self.dispatch(Action::LoadStarted);
        let listing = self.store.list(&FilterCriteria::default()).await;
        debug!(
            "Loaded {} jobs ({:?})",
            listing.jobs.len(),
            listing.source
        );
        self.dispatch(Action::JobsLoaded {
            degraded: listing.is_degraded(),
            jobs: listing.jobs,
        });
        self.refilter().await;
    }

    /// Recompute the filtered listing for the current criteria
    pub async fn refilter(&mut self) {
        self.dispatch(Action::ListRequested);
        let seq = self.state.list_seq;
        let criteria = self.state.criteria.clone();

        let listing = self.store.list(&criteria).await;
        self.dispatch(Action::FilteredLoaded {
            seq,
            degraded: listing.is_degraded(),
            jobs: listing.jobs,
        });
    }

    pub async fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.dispatch(Action::SetCriteria(criteria));
        self.refilter().await;
    }

    pub async fn select_company(&mut self, company: &str) {
        self.dispatch(Action::SelectCompany(company.to_string()));
        self.refilter().await;
    }

    pub async fn select_location(&mut self, location: &str) {
        self.dispatch(Action::SelectLocation(location.to_string()));
        self.refilter().await;
    }

    /// Open the detail view for a job of the canonical collection
    pub fn select_job(&mut self, id: JobId) -> Option<&Job> {
        let job = self.state.jobs.iter().find(|j| j.id == id)?.clone();
        self.dispatch(Action::SelectJob(job));
        self.state.selected_job()
    }

    pub async fn find_job(&self, id: JobId) -> StoreResult<Option<Job>> {
        self.store.get(id).await
    }

    /// Create, or update the job being edited, then reload everything.
    ///
    /// On failure the collection is left as it was and the error is returned.
    pub async fn submit_job(&mut self, draft: JobDraft) -> StoreResult<Job> {
        let result = match self.state.form.editing_job().map(|job| job.id) {
            Some(id) => self.store.update(id, &JobPatch::from(draft)).await,
            None => self.store.create(&draft).await,
        };
        self.finish_write(result).await
    }

    /// Apply a partial update to one job, then reload everything
    pub async fn patch_job(&mut self, id: JobId, patch: JobPatch) -> StoreResult<Job> {
        let result = self.store.update(id, &patch).await;
        self.finish_write(result).await
    }

    /// Delete after `confirm` approves; `Ok(false)` when it declines.
    pub async fn remove_job<F>(&mut self, id: JobId, confirm: F) -> StoreResult<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_CONFIRMATION) {
            info!("Deletion of job {} cancelled", id);
            return Ok(false);
        }

        let result = self.store.delete(id).await;
        self.finish_write(result).await?;
        if matches!(&self.state.view, View::JobDetail(job) if job.id == id) {
            self.dispatch(Action::Back);
        }
        Ok(true)
    }

    async fn finish_write<T>(&mut self, result: Result<T, StoreError>) -> StoreResult<T> {
        match result {
            Ok(value) => {
                self.dispatch(Action::WriteSucceeded);
                self.load_all().await;
                Ok(value)
            }
            Err(e) => {
                warn!("Error saving job: {}", e);
                self.dispatch(Action::WriteFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
