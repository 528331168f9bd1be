use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ProfileResolver, RepositoryError};
use crate::domain::ProfileId;

pub struct PgProfileResolver {
    pool: PgPool,
}

impl PgProfileResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileResolver for PgProfileResolver {
    #[instrument(skip(self, subject))]
    async fn resolve(&self, subject: &str) -> Result<Option<ProfileId>, RepositoryError> {
        let row = sqlx::query("SELECT id FROM profiles WHERE auth_subject = $1")
            .bind(subject)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(row) => {
                let id: Uuid = row
                    .try_get("id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                Ok(Some(ProfileId::from_uuid(id)))
            }
            None => Ok(None),
        }
    }
}
