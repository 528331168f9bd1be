use std::sync::Arc;

use crate::application::ports::{TextGenerator, TextGenerationError};
use crate::domain::{CourseDraft, CourseId, CourseRequest, Job};

use super::course_assembler::CourseAssembler;
use super::generation_worker::GenerationMessage;
use super::job_store::JobStore;
use super::payload_validator::{course_draft_from_value, final_exam_from_value, PayloadError};
use super::prompt_builder::{course_prompt, final_exam_prompt};
use super::response_parser::extract_json;

/// Drives one generation job end to end: prompt, provider call, parse,
/// validate, persist, and the job state transitions around all of it.
pub struct CourseGenerator {
    generator: Arc<dyn TextGenerator>,
    assembler: CourseAssembler,
    job_store: JobStore,
    temperature: f32,
}

impl CourseGenerator {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        assembler: CourseAssembler,
        job_store: JobStore,
        temperature: f32,
    ) -> Self {
        Self {
            generator,
            assembler,
            job_store,
            temperature,
        }
    }

    /// Runs a job to one of its two terminal states. Never returns an
    /// error: every failure is recorded on the job itself.
    pub async fn process_job(&self, msg: GenerationMessage) {
        let GenerationMessage { mut job, request } = msg;

        if let Err(e) = self.job_store.set_processing(&mut job).await {
            tracing::error!(
                error = %e,
                job_id = %job.id.as_uuid(),
                "Failed to mark job as processing"
            );
            return;
        }

        match self.run_pipeline(&mut job, &request).await {
            Ok(course_id) => {
                if let Err(e) = self.job_store.complete(&mut job, course_id).await {
                    tracing::error!(
                        error = %e,
                        job_id = %job.id.as_uuid(),
                        "Failed to mark job as completed"
                    );
                    return;
                }
                tracing::info!(
                    job_id = %job.id.as_uuid(),
                    course_id = %course_id.as_uuid(),
                    "Course generation completed"
                );
            }
            Err(e) => {
                let error_msg = e.to_string();
                tracing::error!(
                    error = %error_msg,
                    job_id = %job.id.as_uuid(),
                    "Course generation failed"
                );
                if let Err(persist_err) = self.job_store.fail(&mut job, &error_msg).await {
                    tracing::error!(
                        error = %persist_err,
                        job_id = %job.id.as_uuid(),
                        "Failed to record job failure"
                    );
                }
            }
        }
    }

    async fn run_pipeline(
        &self,
        job: &mut Job,
        request: &CourseRequest,
    ) -> Result<CourseId, GenerationError> {
        self.job_store
            .append_progress(
                job,
                format!("Requesting course outline for \"{}\"", request.topic),
            )
            .await
            .map_err(GenerationError::Repository)?;

        let messages = course_prompt(request);
        let raw = self
            .generator
            .complete(&messages, self.temperature)
            .await
            .map_err(GenerationError::Provider)?;
        let value = extract_json(&raw).ok_or(GenerationError::UnparsableResponse)?;
        let draft = course_draft_from_value(value).map_err(GenerationError::Payload)?;

        self.job_store
            .append_progress(
                job,
                format!("Course outline validated: {} modules", draft.modules.len()),
            )
            .await
            .map_err(GenerationError::Repository)?;

        let course_id = self
            .assembler
            .create_course(request, &draft, job.created_by)
            .await
            .map_err(GenerationError::Repository)?;
        self.job_store
            .append_progress(job, format!("Created course record \"{}\"", draft.title))
            .await
            .map_err(GenerationError::Repository)?;

        let total = draft.modules.len();
        for (index, module) in draft.modules.iter().enumerate() {
            self.assembler
                .append_module(course_id, index, module)
                .await
                .map_err(GenerationError::Repository)?;
            self.job_store
                .record_module(job, index, total, &module.title)
                .await
                .map_err(GenerationError::Repository)?;
        }

        // The final exam is an optional enrichment: its failure must not
        // take down a course that is already fully persisted.
        if request.include_final_exam {
            match self.append_final_exam(request, &draft, course_id).await {
                Ok(question_count) => {
                    self.job_store
                        .append_progress(
                            job,
                            format!("Final exam appended with {} questions", question_count),
                        )
                        .await
                        .map_err(GenerationError::Repository)?;
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        job_id = %job.id.as_uuid(),
                        "Final exam generation failed, completing course without it"
                    );
                    self.job_store
                        .append_progress(job, format!("Final exam skipped: {}", e))
                        .await
                        .map_err(GenerationError::Repository)?;
                }
            }
        }

        Ok(course_id)
    }

    async fn append_final_exam(
        &self,
        request: &CourseRequest,
        draft: &CourseDraft,
        course_id: CourseId,
    ) -> Result<usize, GenerationError> {
        let titles: Vec<String> = draft.modules.iter().map(|m| m.title.clone()).collect();
        let messages = final_exam_prompt(request, &titles);
        let raw = self
            .generator
            .complete(&messages, self.temperature)
            .await
            .map_err(GenerationError::Provider)?;
        let value = extract_json(&raw).ok_or(GenerationError::UnparsableResponse)?;
        let exam = final_exam_from_value(value).map_err(GenerationError::Payload)?;

        self.assembler
            .append_final_exam(course_id, draft.modules.len(), &exam)
            .await
            .map_err(GenerationError::Repository)?;

        Ok(exam.questions.len())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("provider: {0}")]
    Provider(TextGenerationError),
    #[error("response contained no JSON payload")]
    UnparsableResponse,
    #[error("{0}")]
    Payload(PayloadError),
    #[error("repository: {0}")]
    Repository(crate::application::ports::RepositoryError),
}
