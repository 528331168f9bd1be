mod course_repository;
mod job_repository;
mod profile_resolver;
mod repository_error;
mod text_generator;

pub use course_repository::{CourseRepository, ModuleType, NewCourse, NewModule, NewQuiz};
pub use job_repository::JobRepository;
pub use profile_resolver::ProfileResolver;
pub use repository_error::RepositoryError;
pub use text_generator::{ChatMessage, TextGenerationError, TextGenerator};
