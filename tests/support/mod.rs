//! In-process stand-in for the jobs API, bound to a random loopback port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

use job_board::core::seed_jobs;
use job_board::{
    select_and_order, ClientConfig, FilterCriteria, Job, JobDraft, JobPatch, JobType, SortOrder,
};

#[derive(Default)]
pub struct StubState {
    pub jobs: Mutex<Vec<Job>>,
    /// Every route answers 503 while set
    pub outage: AtomicBool,
}

pub type SharedStub = Arc<StubState>;

#[derive(Deserialize)]
struct ListQuery {
    keyword: Option<String>,
    job_type: Option<String>,
    location: Option<String>,
    sort: Option<String>,
}

impl ListQuery {
    fn criteria(&self) -> Result<FilterCriteria, String> {
        let job_type = self.job_type.as_deref().map(str::parse::<JobType>).transpose()?;
        let sort = self
            .sort
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        Ok(FilterCriteria::new()
            .with_keyword(self.keyword.as_deref())
            .with_job_type(job_type)
            .with_location(self.location.as_deref())
            .with_sort(sort))
    }
}

fn outage(state: &StubState) -> Option<Response> {
    state.outage.load(Ordering::SeqCst).then(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "maintenance" })),
        )
            .into_response()
    })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Job not found" }))).into_response()
}

async fn list_jobs(State(state): State<SharedStub>, Query(query): Query<ListQuery>) -> Response {
    if let Some(resp) = outage(&state) {
        return resp;
    }
    match query.criteria() {
        Ok(criteria) => {
            let jobs = select_and_order(&state.jobs.lock().unwrap(), &criteria);
            Json(jobs).into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response(),
    }
}

async fn get_job(State(state): State<SharedStub>, Path(id): Path<u64>) -> Response {
    if let Some(resp) = outage(&state) {
        return resp;
    }
    let jobs = state.jobs.lock().unwrap();
    match jobs.iter().find(|j| j.id == id) {
        Some(job) => Json(job.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_job(State(state): State<SharedStub>, Json(draft): Json<JobDraft>) -> Response {
    if let Some(resp) = outage(&state) {
        return resp;
    }
    if let Err(e) = draft.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response();
    }
    let mut jobs = state.jobs.lock().unwrap();
    let id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
    let job = draft.into_job(id);
    jobs.push(job.clone());
    (StatusCode::CREATED, Json(job)).into_response()
}

async fn update_job(
    State(state): State<SharedStub>,
    Path(id): Path<u64>,
    Json(patch): Json<JobPatch>,
) -> Response {
    if let Some(resp) = outage(&state) {
        return resp;
    }
    let mut jobs = state.jobs.lock().unwrap();
    match jobs.iter_mut().find(|j| j.id == id) {
        Some(job) => {
            patch.apply(job);
            Json(job.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn delete_job(State(state): State<SharedStub>, Path(id): Path<u64>) -> Response {
    if let Some(resp) = outage(&state) {
        return resp;
    }
    let mut jobs = state.jobs.lock().unwrap();
    let before = jobs.len();
    jobs.retain(|j| j.id != id);
    if jobs.len() == before {
        not_found()
    } else {
        Json(json!({ "message": "Job deleted successfully" })).into_response()
    }
}

async fn health(State(state): State<SharedStub>) -> Response {
    let count = state.jobs.lock().unwrap().len();
    Json(json!({ "status": "healthy", "jobs": count })).into_response()
}

pub struct StubServer {
    pub addr: SocketAddr,
    pub state: SharedStub,
}

impl StubServer {
    /// Serve the seed postings
    pub async fn start() -> Self {
        Self::start_with(seed_jobs()).await
    }

    pub async fn start_with(jobs: Vec<Job>) -> Self {
        let state = Arc::new(StubState {
            jobs: Mutex::new(jobs),
            outage: AtomicBool::new(false),
        });

        let app = Router::new()
            .route("/api/jobs", get(list_jobs).post(create_job))
            .route(
                "/api/jobs/:id",
                get(get_job).put(update_job).delete(delete_job),
            )
            .route("/api/health", get(health))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_base_url(&format!("http://{}/api/", self.addr)).with_timeout(5)
    }

    pub fn set_outage(&self, down: bool) {
        self.state.outage.store(down, Ordering::SeqCst);
    }

    pub fn job_count(&self) -> usize {
        self.state.jobs.lock().unwrap().len()
    }
}
