mod generate_course;
mod health;
mod jobs;

pub use generate_course::{
    generate_course_handler, AudienceField, GenerateCourseRequest, GenerateCourseResponse,
    USER_ID_HEADER,
};
pub use health::health_handler;
pub use jobs::{job_status_handler, list_jobs_handler, JobResponse};
