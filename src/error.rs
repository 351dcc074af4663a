use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    /// Non-success reply from the inference endpoint; `body` is kept verbatim.
    #[error("{body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid JSON from model: {reason}\nRaw: {raw}")]
    InvalidModelOutput { reason: String, raw: String },

    #[error("Upstream request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_model_output(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::InvalidModelOutput {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// HTTP status reported to callers of the service for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::InvalidModelOutput { .. } | Self::Llm(_) | Self::Network(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upstream_status_is_passed_through() {
        let err = Error::upstream(429, "rate limited");
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_bad_gateway() {
        let err = Error::upstream(1000, "nonsense");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_model_output_message_carries_raw_text() {
        let err = Error::invalid_model_output("No JSON object found in model output.", "sorry!");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.to_string(),
            "Invalid JSON from model: No JSON object found in model output.\nRaw: sorry!"
        );
    }

    #[test]
    fn test_client_and_startup_statuses() {
        assert_eq!(
            Error::invalid_input("missing").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Timeout { secs: 60 }.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            Error::config("no key").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
