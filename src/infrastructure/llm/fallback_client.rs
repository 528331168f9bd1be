use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ChatMessage, TextGenerationError, TextGenerator};

/// Pairs a primary provider with a secondary. Any failure from the
/// primary triggers one attempt against the secondary with identical
/// messages and temperature; only when both fail does the caller see an
/// error, carrying both causes.
pub struct FallbackTextGenerator {
    primary: Arc<dyn TextGenerator>,
    primary_name: String,
    secondary: Arc<dyn TextGenerator>,
    secondary_name: String,
}

impl FallbackTextGenerator {
    pub fn new(
        primary: Arc<dyn TextGenerator>,
        primary_name: String,
        secondary: Arc<dyn TextGenerator>,
        secondary_name: String,
    ) -> Self {
        Self {
            primary,
            primary_name,
            secondary,
            secondary_name,
        }
    }
}

#[async_trait]
impl TextGenerator for FallbackTextGenerator {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, TextGenerationError> {
        let primary_error = match self.primary.complete(messages, temperature).await {
            Ok(text) => return Ok(text),
            Err(e) => e,
        };

        tracing::warn!(
            primary = %self.primary_name,
            secondary = %self.secondary_name,
            error = %primary_error,
            "Primary provider failed, falling back to secondary"
        );

        match self.secondary.complete(messages, temperature).await {
            Ok(text) => Ok(text),
            Err(secondary_error) => Err(TextGenerationError::AllProvidersFailed(format!(
                "{}: {}; {}: {}",
                self.primary_name, primary_error, self.secondary_name, secondary_error
            ))),
        }
    }
}
