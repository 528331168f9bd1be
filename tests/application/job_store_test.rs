use std::sync::Arc;

use coursegen::application::ports::JobRepository;
use coursegen::application::services::JobStore;
use coursegen::domain::{CourseId, Job, JobStatus};
use coursegen::infrastructure::persistence::InMemoryJobRepository;
use serde_json::json;

fn store() -> (JobStore, Arc<InMemoryJobRepository>) {
    let repo = Arc::new(InMemoryJobRepository::new());
    (JobStore::new(repo.clone()), repo)
}

async fn persisted(repo: &InMemoryJobRepository, job: &Job) -> Job {
    repo.get_by_id(job.id).await.unwrap().unwrap()
}

#[tokio::test]
async fn given_new_job_when_created_then_persisted_as_queued() {
    let (store, repo) = store();

    let job = store.create(json!({"topic": "Rust"}), None).await.unwrap();

    let saved = persisted(&repo, &job).await;
    assert_eq!(saved.status, JobStatus::Queued);
    assert_eq!(saved.job_type, "course_generation");
    assert_eq!(saved.input, json!({"topic": "Rust"}));
    assert!(saved.output.progress.is_empty());
}

#[tokio::test]
async fn given_queued_job_when_set_processing_then_status_is_persisted() {
    let (store, repo) = store();
    let mut job = store.create(json!({}), None).await.unwrap();

    store.set_processing(&mut job).await.unwrap();

    assert_eq!(job.status, JobStatus::Processing);
    assert_eq!(persisted(&repo, &job).await.status, JobStatus::Processing);
}

#[tokio::test]
async fn given_progress_appends_when_each_lands_then_log_is_persisted_incrementally() {
    let (store, repo) = store();
    let mut job = store.create(json!({}), None).await.unwrap();

    store
        .append_progress(&mut job, "first".to_string())
        .await
        .unwrap();
    assert_eq!(persisted(&repo, &job).await.output.progress.len(), 1);

    store
        .append_progress(&mut job, "second".to_string())
        .await
        .unwrap();
    let saved = persisted(&repo, &job).await;
    assert_eq!(saved.output.progress.len(), 2);
    assert_eq!(saved.output.progress[1].message, "second");
}

#[tokio::test]
async fn given_module_recorded_then_entry_and_event_are_persisted() {
    let (store, repo) = store();
    let mut job = store.create(json!({}), None).await.unwrap();

    store
        .record_module(&mut job, 0, 8, "Getting Started")
        .await
        .unwrap();

    let saved = persisted(&repo, &job).await;
    assert_eq!(saved.output.modules.len(), 1);
    assert_eq!(saved.output.modules[0].title, "Getting Started");
    assert_eq!(saved.output.progress.len(), 1);
    assert!(saved.output.progress[0].message.contains("1 of 8"));
}

#[tokio::test]
async fn given_job_when_completed_then_course_id_and_status_are_persisted() {
    let (store, repo) = store();
    let mut job = store.create(json!({}), None).await.unwrap();
    let course_id = CourseId::new();

    store.complete(&mut job, course_id).await.unwrap();

    let saved = persisted(&repo, &job).await;
    assert_eq!(saved.status, JobStatus::Completed);
    assert_eq!(saved.output.course_id, Some(course_id));
    assert!(saved.error_message.is_none());
}

#[tokio::test]
async fn given_job_when_failed_then_error_message_is_persisted() {
    let (store, repo) = store();
    let mut job = store.create(json!({}), None).await.unwrap();

    store.fail(&mut job, "both providers failed").await.unwrap();

    let saved = persisted(&repo, &job).await;
    assert_eq!(saved.status, JobStatus::Failed);
    assert_eq!(saved.error_message.as_deref(), Some("both providers failed"));
    assert!(saved.output.course_id.is_none());
}
