use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{JobId, JobOutput, JobStatus, ProfileId};

pub const COURSE_GENERATION_JOB: &str = "course_generation";

/// A persisted background job. `input` is an immutable snapshot of the
/// trigger payload; `output` accumulates progress as the pipeline runs.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub job_type: String,
    pub status: JobStatus,
    pub input: Value,
    pub output: JobOutput,
    pub error_message: Option<String>,
    pub created_by: Option<ProfileId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(job_type: String, input: Value, created_by: Option<ProfileId>) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            job_type,
            status: JobStatus::Queued,
            input,
            output: JobOutput::default(),
            error_message: None,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
