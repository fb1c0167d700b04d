use crate::controllers::empresa_controller::EmpresaController;
use crate::dto::catalogo_dto::ActualizarEmpresaRequest;
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Empresa;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

pub fn create_empresa_router() -> Router<AppState> {
    Router::new()
        .route("/", get(obtener_empresa))
        .route("/", put(guardar_empresa))
}

async fn obtener_empresa(State(state): State<AppState>) -> Result<Json<Empresa>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    let response = controller.obtener().await?;
    Ok(Json(response))
}

async fn guardar_empresa(
    State(state): State<AppState>,
    Json(request): Json<ActualizarEmpresaRequest>,
) -> Result<Json<ApiResponse<Empresa>>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    let response = controller.guardar(request).await?;
    Ok(Json(response))
}
