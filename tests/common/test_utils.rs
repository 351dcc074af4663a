use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use stylecheck_words::{
    config::LlmConfig,
    server::{handlers::AppState, router},
};

use super::MockLlmClient;

pub const TEST_MODEL: &str = "test-org/test-model";

/// The generated payload used throughout the tests, as the model would print it.
pub const SAMPLE_GENERATION: &str = r#"{"three_word_name":"A B C","five_word_name":"A B C D E","eight_word_name":"A B C D E F G H","short_description":"x","long_description":["p1","p2","p3"]}"#;

pub fn fenced(body: &str) -> String {
    format!("```json\n{}\n```", body)
}

pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "choices": [
            { "message": { "content": content } }
        ]
    })
}

/// LLM settings pointing at a mock upstream.
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        model: TEST_MODEL.to_string(),
        ..LlmConfig::default()
    }
}

pub fn create_test_app(llm: MockLlmClient) -> Router {
    create_test_app_with_origin(llm, "*")
}

pub fn create_test_app_with_origin(llm: MockLlmClient, origin: &str) -> Router {
    let state = AppState {
        llm: Arc::new(llm),
        model: TEST_MODEL.to_string(),
    };
    router(state, origin).expect("valid test router")
}
