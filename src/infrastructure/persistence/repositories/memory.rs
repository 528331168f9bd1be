use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::ports::{
    CourseRepository, JobRepository, NewCourse, NewModule, NewQuiz, ProfileResolver,
    RepositoryError,
};
use crate::domain::{Job, JobId, JobOutput, JobStatus, ProfileId};

/// Stateful in-memory job store. Backs scaffold mode so the full
/// trigger-poll loop works without PostgreSQL, and doubles as the test
/// repository.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<HashMap<Uuid, Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = lock(&self.jobs)?;
        jobs.insert(job.id.as_uuid(), job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let jobs = lock(&self.jobs)?;
        Ok(jobs.get(&id.as_uuid()).cloned())
    }

    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut jobs = lock(&self.jobs)?;
        if let Some(job) = jobs.get_mut(&id.as_uuid()) {
            job.status = status;
            job.error_message = error_message.map(String::from);
            job.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_output(&self, id: JobId, output: &JobOutput) -> Result<(), RepositoryError> {
        let mut jobs = lock(&self.jobs)?;
        if let Some(job) = jobs.get_mut(&id.as_uuid()) {
            job.output = output.clone();
            job.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, RepositoryError> {
        let jobs = lock(&self.jobs)?;
        let mut matching: Vec<Job> = jobs
            .values()
            .filter(|job| job.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

/// Stateful in-memory course catalog, same role as [`InMemoryJobRepository`].
/// The snapshot accessors exist for assertions.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<NewCourse>>,
    modules: Mutex<Vec<NewModule>>,
    quizzes: Mutex<Vec<NewQuiz>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> Vec<NewCourse> {
        self.courses.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn modules(&self) -> Vec<NewModule> {
        self.modules.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn quizzes(&self) -> Vec<NewQuiz> {
        self.quizzes.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn insert_course(&self, course: &NewCourse) -> Result<(), RepositoryError> {
        lock(&self.courses)?.push(course.clone());
        Ok(())
    }

    async fn insert_module(&self, module: &NewModule) -> Result<(), RepositoryError> {
        lock(&self.modules)?.push(module.clone());
        Ok(())
    }

    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<(), RepositoryError> {
        lock(&self.quizzes)?.push(quiz.clone());
        Ok(())
    }
}

/// Resolver for scaffold mode: every subject is anonymous.
pub struct NullProfileResolver;

#[async_trait]
impl ProfileResolver for NullProfileResolver {
    async fn resolve(&self, _subject: &str) -> Result<Option<ProfileId>, RepositoryError> {
        Ok(None)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::QueryFailed("in-memory store mutex poisoned".to_string()))
}
