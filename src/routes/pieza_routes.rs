use crate::controllers::pieza_controller::PiezaController;
use crate::dto::catalogo_dto::{ActualizarPiezaRequest, CrearPiezaRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Pieza;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_pieza_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_pieza))
        .route("/", get(listar_piezas))
        .route("/:id", get(obtener_pieza))
        .route("/:id", put(actualizar_pieza))
        .route("/:id", delete(eliminar_pieza))
}

async fn crear_pieza(
    State(state): State<AppState>,
    Json(request): Json<CrearPiezaRequest>,
) -> Result<Json<ApiResponse<Pieza>>, AppError> {
    let controller = PiezaController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_piezas(State(state): State<AppState>) -> Result<Json<Vec<Pieza>>, AppError> {
    let controller = PiezaController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_pieza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Pieza>, AppError> {
    let controller = PiezaController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_pieza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarPiezaRequest>,
) -> Result<Json<ApiResponse<Pieza>>, AppError> {
    let controller = PiezaController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_pieza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = PiezaController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}
