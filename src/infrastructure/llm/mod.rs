mod chat_completions_client;
mod fallback_client;
mod mock_text_generator;

pub use chat_completions_client::ChatCompletionsClient;
pub use fallback_client::FallbackTextGenerator;
pub use mock_text_generator::MockTextGenerator;
