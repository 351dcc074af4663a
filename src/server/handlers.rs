use super::types::{ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse};
use crate::{
    Error,
    generation::{build_prompt, parse_generation},
    llm::LlmClient,
};
use axum::{
    async_trait,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const MISSING_ATTRIBUTES: &str = "Provide 'attributes' string from your website.";

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub model: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// `Json` extractor whose rejections use the same `{"detail": ..}` body as
/// every other error from this service.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                Err((
                    rejection.status(),
                    Json(ErrorResponse {
                        detail: rejection.body_text(),
                    }),
                ))
            }
        }
    }
}

fn api_error(e: Error) -> ApiError {
    (
        e.status_code(),
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model.clone(),
    })
}

pub async fn generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let attributes = match request.attributes.as_deref() {
        Some(attributes) if !attributes.is_empty() => attributes,
        _ => {
            warn!(%request_id, "Rejected generate request without attributes");
            return Err(api_error(Error::invalid_input(MISSING_ATTRIBUTES)));
        }
    };

    info!(
        %request_id,
        apparel_type = request.apparel_type.as_deref().unwrap_or("-"),
        "Generating names for attributes: {}",
        attributes
    );

    let prompt = build_prompt(attributes);

    let raw = state.llm.complete(&prompt).await.map_err(|e| {
        error!(%request_id, "Inference call failed: {}", e);
        api_error(e)
    })?;

    let generated = parse_generation(&raw).map_err(|e| {
        error!(%request_id, "Unusable model output: {}", e);
        api_error(e)
    })?;

    info!(%request_id, "Generated '{}'", generated.three_word_name());

    Ok(Json(GenerateResponse { generated }))
}
