use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use coursegen::application::ports::{
    ChatMessage, CourseRepository, JobRepository, NewCourse, NewModule, NewQuiz, RepositoryError,
    TextGenerationError, TextGenerator,
};
use coursegen::application::services::{
    CourseAssembler, CourseGenerator, GenerationMessage, JobStore,
};
use coursegen::domain::{CourseRequest, CourseRequestOptions, JobStatus};
use coursegen::infrastructure::persistence::{InMemoryCourseRepository, InMemoryJobRepository};
use serde_json::json;

/// Replays a fixed sequence of provider responses, one per call.
struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, TextGenerationError>>>,
}

impl ScriptedGenerator {
    fn new(responses: Vec<Result<String, TextGenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _temperature: f32,
    ) -> Result<String, TextGenerationError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TextGenerationError::InvalidResponse("script exhausted".into())))
    }
}

/// Delegates to the in-memory catalog but fails module inserts once a
/// threshold is reached.
struct FailingModuleRepository {
    inner: Arc<InMemoryCourseRepository>,
    fail_after: usize,
}

#[async_trait]
impl CourseRepository for FailingModuleRepository {
    async fn insert_course(&self, course: &NewCourse) -> Result<(), RepositoryError> {
        self.inner.insert_course(course).await
    }

    async fn insert_module(&self, module: &NewModule) -> Result<(), RepositoryError> {
        if self.inner.modules().len() >= self.fail_after {
            return Err(RepositoryError::QueryFailed("disk full".to_string()));
        }
        self.inner.insert_module(module).await
    }

    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<(), RepositoryError> {
        self.inner.insert_quiz(quiz).await
    }
}

fn course_payload(module_count: usize, with_quizzes: bool) -> serde_json::Value {
    let modules: Vec<serde_json::Value> = (1..=module_count)
        .map(|n| {
            let mut module = json!({
                "title": format!("Module {}", n),
                "summary": format!("Summary {}", n),
                "body": format!("Body {}", n),
            });
            if with_quizzes {
                module["quiz"] = json!({
                    "title": format!("Quiz {}", n),
                    "questions": [
                        {"prompt": "Pick", "options": ["a", "b"], "correct_index": 0}
                    ]
                });
            }
            module
        })
        .collect();

    json!({
        "title": "Generated Course",
        "description": "From the scripted provider.",
        "modules": modules,
    })
}

fn exam_payload() -> serde_json::Value {
    json!({
        "questions": [
            {
                "question": "Q1",
                "options": ["right", "wrong"],
                "correct_answer": "right",
                "explanation": "Because."
            }
        ]
    })
}

fn request(include_final_exam: bool) -> CourseRequest {
    CourseRequest::new(CourseRequestOptions {
        topic: Some("Testing".to_string()),
        include_final_exam: Some(include_final_exam),
        ..Default::default()
    })
    .unwrap()
}

struct Harness {
    jobs: Arc<InMemoryJobRepository>,
    courses: Arc<InMemoryCourseRepository>,
    generator: CourseGenerator,
    store: JobStore,
}

fn harness_with_repo(
    responses: Vec<Result<String, TextGenerationError>>,
    course_repo: Arc<dyn CourseRepository>,
    courses: Arc<InMemoryCourseRepository>,
) -> Harness {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let store = JobStore::new(jobs.clone());
    let generator = CourseGenerator::new(
        Arc::new(ScriptedGenerator::new(responses)),
        CourseAssembler::new(course_repo),
        store.clone(),
        0.7,
    );
    Harness {
        jobs,
        courses,
        generator,
        store,
    }
}

fn harness(responses: Vec<Result<String, TextGenerationError>>) -> Harness {
    let courses = Arc::new(InMemoryCourseRepository::new());
    harness_with_repo(responses, courses.clone(), courses)
}

async fn run_job(h: &Harness, request: CourseRequest) -> coursegen::domain::Job {
    let job = h.store.create(json!({"topic": "Testing"}), None).await.unwrap();
    let job_id = job.id;
    h.generator
        .process_job(GenerationMessage { job, request })
        .await;
    h.jobs.get_by_id(job_id).await.unwrap().unwrap()
}

#[tokio::test]
async fn given_valid_course_and_exam_when_processed_then_job_completes_with_full_graph() {
    let h = harness(vec![
        Ok(course_payload(8, true).to_string()),
        Ok(exam_payload().to_string()),
    ]);

    let job = run_job(&h, request(true)).await;

    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.output.course_id.is_some());
    assert_eq!(job.output.modules.len(), 8);
    assert_eq!(h.courses.modules().len(), 9);
    assert_eq!(h.courses.quizzes().len(), 9);
}

#[tokio::test]
async fn given_fenced_course_without_quizzes_when_processed_then_modules_persist_without_quizzes() {
    let fenced = format!(
        "Here is your course:\n```json\n{}\n```\nEnjoy!",
        course_payload(10, false)
    );
    let h = harness(vec![Ok(fenced)]);

    let job = run_job(&h, request(false)).await;

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(h.courses.modules().len(), 10);
    assert!(h.courses.quizzes().is_empty());
    for (position, module) in h.courses.modules().iter().enumerate() {
        assert_eq!(module.order_index, position as u32);
    }
}

#[tokio::test]
async fn given_provider_failure_on_course_step_when_processed_then_job_fails() {
    let h = harness(vec![Err(TextGenerationError::AllProvidersFailed(
        "openai: timeout; mistral: timeout".to_string(),
    ))]);

    let job = run_job(&h, request(true)).await;

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job.error_message.unwrap().contains("timeout"));
    assert!(h.courses.courses().is_empty());
}

#[tokio::test]
async fn given_unparsable_course_response_when_processed_then_job_fails() {
    let h = harness(vec![Ok("Sorry, I cannot help with that.".to_string())]);

    let job = run_job(&h, request(false)).await;

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job
        .error_message
        .unwrap()
        .contains("no JSON payload"));
}

#[tokio::test]
async fn given_invalid_course_schema_when_processed_then_job_fails() {
    let bad = json!({
        "title": "Bad",
        "description": "Quiz index out of range.",
        "modules": [
            {
                "title": "M1",
                "summary": "s",
                "body": "b",
                "quiz": {
                    "title": "q",
                    "questions": [
                        {"prompt": "p", "options": ["a", "b"], "correct_index": 5}
                    ]
                }
            }
        ]
    });
    let h = harness(vec![Ok(bad.to_string())]);

    let job = run_job(&h, request(false)).await;

    assert_eq!(job.status, JobStatus::Failed);
    assert!(h.courses.courses().is_empty());
}

#[tokio::test]
async fn given_invalid_exam_answer_when_processed_then_job_completes_without_exam() {
    let bad_exam = json!({
        "questions": [
            {
                "question": "Capital of France?",
                "options": ["London", "Berlin", "Rome"],
                "correct_answer": "Paris"
            }
        ]
    });
    let h = harness(vec![
        Ok(course_payload(8, true).to_string()),
        Ok(bad_exam.to_string()),
    ]);

    let job = run_job(&h, request(true)).await;

    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.output.course_id.is_some());
    // Only the eight regular modules: the exam was dropped, not the course.
    assert_eq!(h.courses.modules().len(), 8);
    assert!(job
        .output
        .progress
        .iter()
        .any(|e| e.message.contains("Final exam skipped")));
}

#[tokio::test]
async fn given_provider_failure_on_exam_step_when_processed_then_job_still_completes() {
    let h = harness(vec![
        Ok(course_payload(8, false).to_string()),
        Err(TextGenerationError::RateLimited),
    ]);

    let job = run_job(&h, request(true)).await;

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(h.courses.modules().len(), 8);
    assert!(job
        .output
        .progress
        .iter()
        .any(|e| e.message.contains("Final exam skipped")));
}

#[tokio::test]
async fn given_module_persistence_failure_when_processed_then_job_fails_but_course_row_remains() {
    let courses = Arc::new(InMemoryCourseRepository::new());
    let failing = Arc::new(FailingModuleRepository {
        inner: courses.clone(),
        fail_after: 3,
    });
    let h = harness_with_repo(
        vec![Ok(course_payload(8, false).to_string())],
        failing,
        courses,
    );

    let job = run_job(&h, request(false)).await;

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job.error_message.unwrap().contains("disk full"));
    // The partial prefix stays: course row plus the modules that landed.
    assert_eq!(h.courses.courses().len(), 1);
    assert_eq!(h.courses.modules().len(), 3);
    assert_eq!(job.output.modules.len(), 3);
}
