use async_trait::async_trait;

/// Interface for a generative-language backend.
/// The only capability this service consumes is "submit prompt text,
/// receive response text".
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Submit one user-authored prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, anyhow::Error>;
}
