use std::sync::Arc;

use serde_json::json;

use crate::application::ports::{
    CourseRepository, ModuleType, NewCourse, NewModule, NewQuiz, RepositoryError,
};
use crate::domain::{
    CourseDraft, CourseId, CourseRequest, FinalExamDraft, ModuleDraft, ModuleId, ProfileId, QuizId,
};

const FALLBACK_MINUTES_PER_MODULE: u32 = 15;
const DRAFT_STATUS: &str = "draft";

const FINAL_EXAM_TITLE: &str = "Final Exam";
const FINAL_EXAM_SUMMARY: &str =
    "A comprehensive final exam covering every module in this course.";
const FINAL_EXAM_BODY: &str = "This final exam covers material from every module in the course. \
Review each module before you begin, then answer all of the questions below.";

/// Turns validated drafts into course, module, and quiz rows. Rows are
/// written one at a time in dependency order; nothing here rolls back, a
/// half-built course stays in the catalog as an unpublished draft.
pub struct CourseAssembler {
    courses: Arc<dyn CourseRepository>,
}

impl CourseAssembler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn create_course(
        &self,
        request: &CourseRequest,
        draft: &CourseDraft,
        created_by: Option<ProfileId>,
    ) -> Result<CourseId, RepositoryError> {
        let estimated_minutes = draft
            .estimated_minutes
            .unwrap_or(draft.modules.len() as u32 * FALLBACK_MINUTES_PER_MODULE);

        let course = NewCourse {
            id: CourseId::new(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            difficulty: request.difficulty.clone(),
            estimated_minutes,
            is_published: false,
            ai_generated: true,
            status: DRAFT_STATUS.to_string(),
            created_by,
        };
        self.courses.insert_course(&course).await?;
        Ok(course.id)
    }

    pub async fn append_module(
        &self,
        course_id: CourseId,
        index: usize,
        module: &ModuleDraft,
    ) -> Result<ModuleId, RepositoryError> {
        let record = NewModule {
            id: ModuleId::new(),
            course_id,
            title: module.title.clone(),
            content: json!({
                "body": module.content,
                "summary": module.summary,
            }),
            order_index: index as u32,
            module_type: ModuleType::Standard,
        };
        self.courses.insert_module(&record).await?;

        if let Some(quiz) = &module.quiz {
            let questions = serde_json::to_value(&quiz.questions).map_err(|e| {
                RepositoryError::QueryFailed(format!("failed to encode quiz questions: {}", e))
            })?;
            self.courses
                .insert_quiz(&NewQuiz {
                    id: QuizId::new(),
                    course_id,
                    module_id: record.id,
                    title: quiz.title.clone(),
                    description: quiz.description.clone(),
                    questions,
                })
                .await?;
        }

        Ok(record.id)
    }

    /// Appends the exam as one terminal module plus its quiz. Runs after
    /// every regular module is in place, so `next_index` is the module
    /// count of the validated draft.
    pub async fn append_final_exam(
        &self,
        course_id: CourseId,
        next_index: usize,
        exam: &FinalExamDraft,
    ) -> Result<(), RepositoryError> {
        let module = NewModule {
            id: ModuleId::new(),
            course_id,
            title: FINAL_EXAM_TITLE.to_string(),
            content: json!({
                "body": FINAL_EXAM_BODY,
                "summary": FINAL_EXAM_SUMMARY,
            }),
            order_index: next_index as u32,
            module_type: ModuleType::FinalExam,
        };
        self.courses.insert_module(&module).await?;

        let questions = serde_json::to_value(&exam.questions).map_err(|e| {
            RepositoryError::QueryFailed(format!("failed to encode exam questions: {}", e))
        })?;
        self.courses
            .insert_quiz(&NewQuiz {
                id: QuizId::new(),
                course_id,
                module_id: module.id,
                title: FINAL_EXAM_TITLE.to_string(),
                description: Some(FINAL_EXAM_SUMMARY.to_string()),
                questions,
            })
            .await?;

        Ok(())
    }
}
