use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub providers: ProvidersSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub connect_retries: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersSettings {
    pub primary: ProviderSettings,
    pub secondary: ProviderSettings,
}

impl ProvidersSettings {
    /// True when at least one provider carries a credential. Without
    /// any, generation requests are refused up front.
    pub fn any_configured(&self) -> bool {
        !self.primary.api_key.trim().is_empty() || !self.secondary.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub name: String,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Layered load: built-in defaults, then an optional
    /// `appsettings.{environment}` file, then `APP__`-prefixed
    /// environment variables (e.g. `APP__PROVIDERS__PRIMARY__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "postgres://localhost:5432/coursegen")?
            .set_default("database.max_connections", 5)?
            .set_default("database.connect_retries", 5)?
            .set_default("providers.primary.name", "openai")?
            .set_default("providers.primary.base_url", "https://api.openai.com/v1")?
            .set_default("providers.primary.api_key", "")?
            .set_default("providers.primary.model", "gpt-4o-mini")?
            .set_default("providers.primary.max_tokens", 16000)?
            .set_default("providers.primary.timeout_seconds", 180)?
            .set_default("providers.secondary.name", "mistral")?
            .set_default("providers.secondary.base_url", "https://api.mistral.ai/v1")?
            .set_default("providers.secondary.api_key", "")?
            .set_default("providers.secondary.model", "mistral-large-latest")?
            .set_default("providers.secondary.max_tokens", 16000)?
            .set_default("providers.secondary.timeout_seconds", 180)?
            .set_default("generation.temperature", 0.7)?
            .set_default("generation.queue_capacity", 64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
