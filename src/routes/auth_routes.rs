use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegistroRequest, UsuarioResponse};
use crate::dto::respuesta::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{extract::State, routing::post, Json, Router};

/// Rutas públicas de autenticación
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/registro", post(registro))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn registro(
    State(state): State<AppState>,
    Json(request): Json<RegistroRequest>,
) -> Result<Json<ApiResponse<UsuarioResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.registrar(request).await?;
    Ok(Json(response))
}
