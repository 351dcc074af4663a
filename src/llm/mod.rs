mod client;
mod types;

pub use client::{ChatCompletionsClient, LlmClient};
pub use types::{ChatCompletionResponse, Choice, ResponseMessage};
