mod course_assembler;
mod course_generator;
mod generation_worker;
mod job_store;
mod payload_validator;
mod prompt_builder;
mod response_parser;

pub use course_assembler::CourseAssembler;
pub use course_generator::{CourseGenerator, GenerationError};
pub use generation_worker::{GenerationMessage, GenerationWorker};
pub use job_store::JobStore;
pub use payload_validator::{course_draft_from_value, final_exam_from_value, PayloadError};
pub use prompt_builder::{course_prompt, final_exam_prompt};
pub use response_parser::extract_json;
