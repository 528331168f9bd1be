mod memory;
mod pg_course_repository;
mod pg_job_repository;
mod pg_profile_resolver;

pub use memory::{InMemoryCourseRepository, InMemoryJobRepository, NullProfileResolver};
pub use pg_course_repository::PgCourseRepository;
pub use pg_job_repository::PgJobRepository;
pub use pg_profile_resolver::PgProfileResolver;
