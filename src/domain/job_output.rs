use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CourseId;

/// Append-only record of what a generation job has produced so far.
/// Stored as the job's `output` column and returned verbatim by the
/// job-status endpoint, so a poller can watch modules land one by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobOutput {
    pub progress: Vec<ProgressEvent>,
    pub modules: Vec<ModuleRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub index: usize,
    pub title: String,
}

impl JobOutput {
    pub fn push_event(&mut self, message: String) {
        self.progress.push(ProgressEvent {
            at: Utc::now(),
            message,
        });
    }

    pub fn push_module(&mut self, index: usize, title: String) {
        self.modules.push(ModuleRecord { index, title });
    }
}
