use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{CourseId, Job, JobStatus, ProfileId, COURSE_GENERATION_JOB};

/// State-machine operations over persisted jobs. Every mutation writes
/// through immediately so a poller sees progress as it happens, not only
/// at the terminal transition.
#[derive(Clone)]
pub struct JobStore {
    jobs: Arc<dyn JobRepository>,
}

impl JobStore {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }

    pub async fn create(
        &self,
        input: Value,
        created_by: Option<ProfileId>,
    ) -> Result<Job, RepositoryError> {
        let job = Job::new(COURSE_GENERATION_JOB.to_string(), input, created_by);
        self.jobs.create(&job).await?;
        Ok(job)
    }

    pub async fn set_processing(&self, job: &mut Job) -> Result<(), RepositoryError> {
        job.status = JobStatus::Processing;
        self.jobs
            .update_status(job.id, JobStatus::Processing, None)
            .await
    }

    pub async fn append_progress(
        &self,
        job: &mut Job,
        message: String,
    ) -> Result<(), RepositoryError> {
        tracing::debug!(job_id = %job.id.as_uuid(), progress = %message, "Job progress");
        job.output.push_event(message);
        self.jobs.update_output(job.id, &job.output).await
    }

    /// Records one persisted module in the output log: the module entry
    /// itself plus a human-readable progress event.
    pub async fn record_module(
        &self,
        job: &mut Job,
        index: usize,
        total: usize,
        title: &str,
    ) -> Result<(), RepositoryError> {
        job.output.push_module(index, title.to_string());
        job.output.push_event(format!(
            "Persisted module {} of {}: {}",
            index + 1,
            total,
            title
        ));
        self.jobs.update_output(job.id, &job.output).await
    }

    pub async fn complete(&self, job: &mut Job, course_id: CourseId) -> Result<(), RepositoryError> {
        job.output.course_id = Some(course_id);
        self.jobs.update_output(job.id, &job.output).await?;
        job.status = JobStatus::Completed;
        self.jobs
            .update_status(job.id, JobStatus::Completed, None)
            .await
    }

    pub async fn fail(&self, job: &mut Job, error: &str) -> Result<(), RepositoryError> {
        job.status = JobStatus::Failed;
        job.error_message = Some(error.to_string());
        self.jobs
            .update_status(job.id, JobStatus::Failed, Some(error))
            .await
    }
}
