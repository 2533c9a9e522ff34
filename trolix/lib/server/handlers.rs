//! HTTP request handlers for the REST API.
//!
//! This module implements the handlers for each API endpoint. The handlers
//! are thin: they unpack the request, call the [`SandboxService`] and wrap the
//! result. Unknown sandbox ids surface as 404 through [`ApiError`].
//!
//! [`SandboxService`]: crate::management::SandboxService

use axum::{
    extract::{Path, State},
    Json,
};

use super::{
    state::ServerState,
    types::{
        ApiError, ApiResponse, CreateSandboxResponse, ExecuteRequest, HealthResponse,
        MessageResponse,
    },
};
use crate::{
    catalog::{self, OsTemplateCatalog},
    config::SERVICE_NAME,
    management::{
        models::{CommandLogEntry, SandboxConfig, SandboxRecord},
        CommandOutcome,
    },
};

//-------------------------------------------------------------------------------------------------
// Functions: Handlers
//-------------------------------------------------------------------------------------------------

/// Handler for the GET /health endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::online(SERVICE_NAME))
}

/// Handler for the GET /os-templates endpoint
pub async fn os_templates_handler() -> Json<OsTemplateCatalog> {
    Json(catalog::list_os_templates())
}

/// Handler for the GET /sandboxes endpoint
pub async fn list_sandboxes_handler(
    State(state): State<ServerState>,
) -> ApiResponse<Vec<SandboxRecord>> {
    Ok(Json(state.service().list().await?))
}

/// Handler for the POST /sandboxes endpoint
///
/// Holds the request open for the provisioning delay.
pub async fn create_sandbox_handler(
    State(state): State<ServerState>,
    Json(config): Json<SandboxConfig>,
) -> ApiResponse<CreateSandboxResponse> {
    tracing::info!("Received create request: {:?}", config);
    let sandbox_id = state.service().create(config).await?;

    Ok(Json(CreateSandboxResponse {
        message: "Sandbox created successfully".to_string(),
        sandbox_id,
    }))
}

/// Handler for the POST /sandboxes/{id}/start endpoint
pub async fn start_sandbox_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResponse<MessageResponse> {
    state.service().start(&id).await?;
    Ok(Json(MessageResponse::new("Sandbox started")))
}

/// Handler for the POST /sandboxes/{id}/stop endpoint
pub async fn stop_sandbox_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResponse<MessageResponse> {
    state.service().stop(&id).await?;
    Ok(Json(MessageResponse::new("Sandbox stopped")))
}

/// Handler for the POST /sandboxes/{id}/save endpoint
pub async fn save_sandbox_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResponse<MessageResponse> {
    state.service().save(&id).await?;
    Ok(Json(MessageResponse::new("Sandbox saved successfully")))
}

/// Handler for the DELETE /sandboxes/{id} endpoint
pub async fn delete_sandbox_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResponse<MessageResponse> {
    state.service().delete(&id).await?;
    Ok(Json(MessageResponse::new("Sandbox deleted")))
}

/// Handler for the POST /terminal/execute endpoint
pub async fn execute_handler(
    State(state): State<ServerState>,
    Json(req): Json<ExecuteRequest>,
) -> ApiResponse<CommandOutcome> {
    state
        .service()
        .execute(&req.sandbox_id, &req.command)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

/// Handler for the GET /terminal/{id}/history endpoint
pub async fn history_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResponse<Vec<CommandLogEntry>> {
    Ok(Json(state.service().history(&id).await?))
}
