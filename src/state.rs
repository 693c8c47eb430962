use std::sync::Arc;

use crate::config::Config;
use crate::llm::{GeminiClient, GenerativeClient};

/// Shared application state. The generative client is constructed once at
/// startup and reused read-only across all in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Option<Arc<dyn GenerativeClient>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = config.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
            )) as Arc<dyn GenerativeClient>
        });

        Self { config, llm }
    }

    /// Build state around an already-constructed client, bypassing the
    /// credential lookup. Used to substitute a stub client in tests.
    pub fn with_client(config: Config, llm: Arc<dyn GenerativeClient>) -> Self {
        Self {
            config,
            llm: Some(llm),
        }
    }
}
