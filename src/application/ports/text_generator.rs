use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One chat-style message sent to a completion provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: String) -> Self {
        Self {
            role: "system".to_string(),
            content,
        }
    }

    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// A generative-text provider. Implementations are expected to return the
/// assistant's full text in one piece; parsing it is the caller's problem.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, TextGenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextGenerationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("no api key configured for provider '{0}'")]
    MissingCredentials(String),
    #[error("all providers failed ({0})")]
    AllProvidersFailed(String),
}
