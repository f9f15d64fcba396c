// src/core/job_client.rs
//! HTTP client for the jobs API - reads degrade to the seed data, writes never do

use reqwest::{Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info, trace, warn};

use super::error::{StoreError, StoreResult};
use super::seed::seed_jobs;
use super::store::{JobStore, Listing, ListingSource};
use crate::config::ClientConfig;
use crate::engine::select_and_order;
use crate::types::{
    response::ApiErrorBody, FilterCriteria, HealthStatus, Job, JobDraft, JobId, JobPatch,
};

const JOBS_ENDPOINT: &str = "/jobs";
const HEALTH_ENDPOINT: &str = "/health";

#[derive(Debug, Clone)]
pub struct JobClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobClient {
    /// Create new jobs client with configuration
    pub fn new(config: &ClientConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn jobs_url(&self) -> String {
        format!("{}{}", self.base_url, JOBS_ENDPOINT)
    }

    fn job_url(&self, id: JobId) -> String {
        format!("{}{}/{}", self.base_url, JOBS_ENDPOINT, id)
    }

    /// List jobs matching `criteria`, as a bare sequence
    pub async fn list_jobs(&self, criteria: &FilterCriteria) -> Vec<Job> {
        self.fetch_listing(criteria).await.jobs
    }

    /// Remote listing, or the seed data filtered locally when the API fails
    pub async fn fetch_listing(&self, criteria: &FilterCriteria) -> Listing {
        match self.fetch_remote(criteria).await {
            Ok(jobs) => Listing {
                jobs,
                source: ListingSource::Remote,
            },
            Err(e) => {
                warn!("Error fetching jobs, using built-in postings: {}", e);
                Listing {
                    jobs: select_and_order(&seed_jobs(), criteria),
                    source: ListingSource::Fallback,
                }
            }
        }
    }

    async fn fetch_remote(&self, criteria: &FilterCriteria) -> StoreResult<Vec<Job>> {
        let url = self.jobs_url();
        let query = criteria.query_pairs();
        trace!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::api(status, None));
        }

        let jobs: Vec<Job> = response.json().await?;
        debug!("Received {} jobs from {}", jobs.len(), url);
        Ok(jobs)
    }

    /// Fetch one job; a 404 is `Ok(None)`
    pub async fn fetch_job(&self, id: JobId) -> StoreResult<Option<Job>> {
        let url = self.job_url(id);
        trace!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| error!("Error fetching job {}: {}", id, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Job {} not found", id);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(Some(response.json().await?))
    }

    pub async fn create_job(&self, draft: &JobDraft) -> StoreResult<Job> {
        draft.validate().map_err(StoreError::Invalid)?;
        let url = self.jobs_url();
        info!("Creating job '{}' at {}", draft.title, draft.company);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .inspect_err(|e| error!("Error creating job: {}", e))?;

        let job: Job = Self::expect_json(response)
            .await
            .inspect_err(|e| error!("Error creating job: {}", e))?;
        info!("Created job {}", job.id);
        Ok(job)
    }

    pub async fn update_job(&self, id: JobId, patch: &JobPatch) -> StoreResult<Job> {
        patch.validate().map_err(StoreError::Invalid)?;
        let url = self.job_url(id);
        info!("Updating job {}", id);

        let response = self
            .client
            .put(&url)
            .json(patch)
            .send()
            .await
            .inspect_err(|e| error!("Error updating job {}: {}", id, e))?;

        Self::expect_json(response)
            .await
            .inspect_err(|e| error!("Error updating job {}: {}", id, e))
    }

    pub async fn delete_job(&self, id: JobId) -> StoreResult<bool> {
        let url = self.job_url(id);
        info!("Deleting job {}", id);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .inspect_err(|e| error!("Error deleting job {}: {}", id, e))?;

        if response.status().is_success() {
            Ok(true)
        } else {
            let err = Self::api_error(response).await;
            error!("Error deleting job {}: {}", id, err);
            Err(err)
        }
    }

    /// Liveness check; failures come back as an unhealthy status
    pub async fn check_health(&self) -> HealthStatus {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);
        let result = async {
            let response = self.client.get(&url).send().await?;
            response.json::<HealthStatus>().await
        }
        .await;

        result.unwrap_or_else(|e| {
            warn!("API health check failed: {}", e);
            HealthStatus::unhealthy(e.to_string())
        })
    }

    async fn expect_json<R>(response: Response) -> StoreResult<R>
    where
        R: serde::de::DeserializeOwned,
    {
        if response.status().is_success() {
            Ok(response.json::<R>().await?)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Turn a non-2xx response into an error, keeping the server message if any
    async fn api_error(response: Response) -> StoreError {
        let status = response.status();
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(ApiErrorBody::into_message),
            Err(_) => None,
        };
        StoreError::api(status, message)
    }
}

impl JobStore for JobClient {
    async fn list(&self, criteria: &FilterCriteria) -> Listing {
        self.fetch_listing(criteria).await
    }

    async fn get(&self, id: JobId) -> StoreResult<Option<Job>> {
        self.fetch_job(id).await
    }

    async fn create(&self, draft: &JobDraft) -> StoreResult<Job> {
        self.create_job(draft).await
    }

    async fn update(&self, id: JobId, patch: &JobPatch) -> StoreResult<Job> {
        self.update_job(id, patch).await
    }

    async fn delete(&self, id: JobId) -> StoreResult<bool> {
        self.delete_job(id).await
    }

    async fn health(&self) -> HealthStatus {
        self.check_health().await
    }
}
