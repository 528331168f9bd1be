mod course_draft;
mod course_request;
mod final_exam;
mod ids;
mod job;
mod job_output;
mod job_status;

pub use course_draft::{CourseDraft, ModuleDraft, QuizDraft, QuizQuestion};
pub use course_request::{CourseRequest, CourseRequestOptions, MAX_MODULES, MIN_MODULES};
pub use final_exam::{FinalExamDraft, FinalExamQuestion};
pub use ids::{CourseId, JobId, ModuleId, ProfileId, QuizId};
pub use job::{Job, COURSE_GENERATION_JOB};
pub use job_output::{JobOutput, ModuleRecord, ProgressEvent};
pub use job_status::JobStatus;
