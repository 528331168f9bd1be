use async_trait::async_trait;

use crate::domain::ProfileId;

use super::RepositoryError;

/// Maps an external authenticated subject (e.g. the `x-user-id` header)
/// to an internal profile. Unknown subjects resolve to `None`; requests
/// without an attributable profile proceed anonymously.
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    async fn resolve(&self, subject: &str) -> Result<Option<ProfileId>, RepositoryError>;
}
