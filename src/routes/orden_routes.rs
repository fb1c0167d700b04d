use crate::controllers::orden_controller::OrdenController;
use crate::dto::orden_dto::{
    ActualizarTotalRequest, CambiarEstadoOrdenRequest, CrearOrdenRequest,
};
use crate::dto::respuesta::ApiResponse;
use crate::models::orden::OrdenServicio;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_orden_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_orden))
        .route("/", get(listar_ordenes))
        .route("/:id", get(obtener_orden))
        .route("/:id", delete(eliminar_orden))
        .route("/:id/total", put(actualizar_total))
        .route("/:id/estado", put(cambiar_estado))
        .route("/:id/finalizar", put(finalizar_orden))
}

async fn crear_orden(
    State(state): State<AppState>,
    Json(request): Json<CrearOrdenRequest>,
) -> Result<Json<ApiResponse<OrdenServicio>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_ordenes(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrdenServicio>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_orden(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrdenServicio>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_total(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarTotalRequest>,
) -> Result<Json<ApiResponse<OrdenServicio>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.actualizar_total(id, request).await?;
    Ok(Json(response))
}

async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CambiarEstadoOrdenRequest>,
) -> Result<Json<ApiResponse<OrdenServicio>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.cambiar_estado(id, request).await?;
    Ok(Json(response))
}

async fn finalizar_orden(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<OrdenServicio>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.finalizar(id).await?;
    Ok(Json(response))
}

async fn eliminar_orden(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}
