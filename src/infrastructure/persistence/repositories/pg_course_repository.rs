use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{
    CourseRepository, NewCourse, NewModule, NewQuiz, RepositoryError,
};

pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self, course), fields(course_id = %course.id.as_uuid()))]
    async fn insert_course(&self, course: &NewCourse) -> Result<(), RepositoryError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO courses
                (id, title, description, difficulty, estimated_minutes, is_published,
                 ai_generated, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(course.id.as_uuid())
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.difficulty)
        .bind(course.estimated_minutes as i32)
        .bind(course.is_published)
        .bind(course.ai_generated)
        .bind(&course.status)
        .bind(course.created_by.map(|p| p.as_uuid()))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(())
    }

    #[instrument(
        skip(self, module),
        fields(module_id = %module.id.as_uuid(), order_index = module.order_index)
    )]
    async fn insert_module(&self, module: &NewModule) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO modules
                (id, course_id, title, content, order_index, module_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(module.id.as_uuid())
        .bind(module.course_id.as_uuid())
        .bind(&module.title)
        .bind(&module.content)
        .bind(module.order_index as i32)
        .bind(module.module_type.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(())
    }

    #[instrument(skip(self, quiz), fields(quiz_id = %quiz.id.as_uuid()))]
    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO quizzes
                (id, course_id, module_id, title, description, questions, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(quiz.id.as_uuid())
        .bind(quiz.course_id.as_uuid())
        .bind(quiz.module_id.as_uuid())
        .bind(&quiz.title)
        .bind(quiz.description.as_deref())
        .bind(&quiz.questions)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(())
    }
}

fn map_err(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_unique_violation() || db.is_foreign_key_violation() =>
        {
            RepositoryError::ConstraintViolation(e.to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}
