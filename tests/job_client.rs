//! JobClient against a live in-process jobs API.

mod support;

use job_board::core::seed_jobs;
use job_board::{
    select_and_order, ClientConfig, FilterCriteria, JobClient, JobDraft, JobPatch, JobType,
    ListingSource, SortOrder, StoreError,
};
use reqwest::StatusCode;

use support::StubServer;

fn draft() -> JobDraft {
    JobDraft::new(
        "Pension Valuation Actuary",
        "Mercer",
        "Philadelphia, PA",
        JobType::FullTime,
    )
    .with_tags(["Pension", "Valuation", "Pension"])
    .with_salary(Some("$100,000 - $120,000"))
}

#[tokio::test]
async fn list_uses_remote_filtering() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    let listing = client
        .fetch_listing(&FilterCriteria::new().with_job_type(Some(JobType::Remote)))
        .await;
    assert_eq!(listing.source, ListingSource::Remote);
    assert_eq!(listing.jobs.len(), 1);
    assert_eq!(listing.jobs[0].title, "Healthcare Consulting Actuary");
}

#[tokio::test]
async fn outage_and_live_listing_agree() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    let criteria = FilterCriteria::new()
        .with_keyword(Some("actuary"))
        .with_location(Some("n"))
        .with_sort(SortOrder::TitleDesc);

    let live = client.fetch_listing(&criteria).await;
    server.set_outage(true);
    let degraded = client.fetch_listing(&criteria).await;

    assert_eq!(live.source, ListingSource::Remote);
    assert_eq!(degraded.source, ListingSource::Fallback);
    assert!(!live.jobs.is_empty());
    assert_eq!(live.jobs, degraded.jobs);
    assert_eq!(degraded.jobs, select_and_order(&seed_jobs(), &criteria));
}

#[tokio::test]
async fn get_missing_job_is_none() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    assert_eq!(client.fetch_job(42).await.unwrap(), None);
    let found = client.fetch_job(3).await.unwrap().unwrap();
    assert_eq!(found.company, "Milliman");
}

#[tokio::test]
async fn create_assigns_id_and_dedups_tags() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    let job = client.create_job(&draft()).await.unwrap();
    assert_eq!(job.id, 9);
    assert_eq!(job.tags, vec!["Pension", "Valuation"]);
    assert_eq!(server.job_count(), 9);
}

#[tokio::test]
async fn update_then_get_round_trips() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    let patch = JobPatch {
        title: Some("Lead Life Actuary".into()),
        job_type: Some(JobType::Contract),
        description: Some(None),
        ..Default::default()
    };
    let updated = client.update_job(1, &patch).await.unwrap();
    let fetched = client.fetch_job(1).await.unwrap().unwrap();

    assert_eq!(updated, fetched);
    assert_eq!(fetched.title, "Lead Life Actuary");
    assert_eq!(fetched.job_type, JobType::Contract);
    assert_eq!(fetched.description, None);
    // untouched fields are retained
    assert_eq!(fetched.company, "MetLife");
    assert_eq!(fetched.salary.as_deref(), Some("$120,000 - $150,000"));
}

#[tokio::test]
async fn write_errors_carry_server_message() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    let err = client.update_job(99, &JobPatch::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "Job not found");

    server.set_outage(true);
    let err = client.create_job(&draft()).await.unwrap_err();
    assert!(matches!(err, StoreError::Api { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(err.to_string(), "maintenance");
    assert_eq!(server.job_count(), 8);
}

#[tokio::test]
async fn create_then_delete_leaves_collection_unchanged() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();
    let before = client.list_jobs(&FilterCriteria::default()).await.len();

    let job = client.create_job(&draft()).await.unwrap();
    assert!(client.delete_job(job.id).await.unwrap());

    let after = client.list_jobs(&FilterCriteria::default()).await;
    assert_eq!(after.len(), before);
    assert!(after.iter().all(|j| j.id != job.id));

    // deleting twice surfaces the 404
    assert!(client.delete_job(job.id).await.is_err());
}

#[tokio::test]
async fn health_reports_payload_or_unhealthy() {
    let server = StubServer::start().await;
    let client = JobClient::new(&server.config()).unwrap();

    let health = client.check_health().await;
    assert!(health.is_healthy());
    assert_eq!(health.details["jobs"], 8);

    let offline = JobClient::new(&ClientConfig::with_base_url("http://127.0.0.1:9/api")).unwrap();
    let health = offline.check_health().await;
    assert_eq!(health.status, "unhealthy");
}
