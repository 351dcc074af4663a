pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{ANY_ORIGIN, Config},
    llm::ChatCompletionsClient,
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let llm = ChatCompletionsClient::new(config.llm.clone())?;

    let app_state = AppState {
        model: llm.model().to_string(),
        llm: Arc::new(llm),
    };

    let app = router(app_state, &config.server.allowed_origin)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} (model {}, allowed origin {})",
        addr, config.llm.model, config.server.allowed_origin
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState, allowed_origin: &str) -> Result<Router> {
    Ok(Router::new()
        .route("/", get(handlers::health))
        .route("/generate", post(handlers::generate))
        .layer(cors_layer(allowed_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// `*` opens the API to any origin without credentials; anything else is
/// treated as the single trusted front-end origin. Other origins get no
/// CORS headers at all.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    if allowed_origin.trim() == ANY_ORIGIN {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origin = HeaderValue::from_str(allowed_origin.trim())
        .map_err(|e| Error::config(format!("Invalid allowed origin '{}': {}", allowed_origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
