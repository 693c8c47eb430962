pub mod gemini;
pub mod interface;

pub use gemini::GeminiClient;
pub use interface::GenerativeClient;
