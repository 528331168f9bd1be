mod pg_pool;
mod repositories;

pub use pg_pool::create_pool;

pub use repositories::InMemoryCourseRepository;
pub use repositories::InMemoryJobRepository;
pub use repositories::NullProfileResolver;
pub use repositories::PgCourseRepository;
pub use repositories::PgJobRepository;
pub use repositories::PgProfileResolver;
