use crate::generation::GenerationResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub apparel_type: Option<String>,
    /// e.g. "Brand: Zara, Fit: Slim, Material: Cotton, Color: Blue"
    #[serde(default)]
    pub attributes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generated: GenerationResult,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
