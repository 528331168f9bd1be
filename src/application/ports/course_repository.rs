use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{CourseId, ModuleId, ProfileId, QuizId};

use super::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
    Standard,
    FinalExam,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Standard => "standard",
            ModuleType::FinalExam => "final_exam",
        }
    }
}

/// Row shapes for the course tables. Timestamps are assigned by the
/// repository at insert time.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub estimated_minutes: u32,
    pub is_published: bool,
    pub ai_generated: bool,
    pub status: String,
    pub created_by: Option<ProfileId>,
}

#[derive(Debug, Clone)]
pub struct NewModule {
    pub id: ModuleId,
    pub course_id: CourseId,
    pub title: String,
    pub content: Value,
    pub order_index: u32,
    pub module_type: ModuleType,
}

#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub id: QuizId,
    pub course_id: CourseId,
    pub module_id: ModuleId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Value,
}

/// Write side of the course catalog. Inserts are issued one row at a
/// time, in dependency order, so a crashed job leaves a readable prefix
/// rather than a broken graph.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn insert_course(&self, course: &NewCourse) -> Result<(), RepositoryError>;

    async fn insert_module(&self, module: &NewModule) -> Result<(), RepositoryError>;

    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<(), RepositoryError>;
}
