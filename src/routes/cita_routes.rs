use crate::controllers::cita_controller::CitaController;
use crate::dto::cita_dto::{
    ActualizarCitaRequest, CambiarEstadoRequest, CrearCitaRequest, TransicionesEstado,
};
use crate::dto::respuesta::ApiResponse;
use crate::models::cita::{Cita, CitaListado};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_cita_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_cita))
        .route("/", get(listar_citas))
        .route("/transiciones", get(transiciones_estado))
        .route("/:id", get(obtener_cita))
        .route("/:id", put(actualizar_cita))
        .route("/:id", delete(eliminar_cita))
        .route("/:id/estado", put(cambiar_estado))
}

async fn crear_cita(
    State(state): State<AppState>,
    Json(request): Json<CrearCitaRequest>,
) -> Result<Json<ApiResponse<Cita>>, AppError> {
    let controller = CitaController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_citas(
    State(state): State<AppState>,
) -> Result<Json<Vec<CitaListado>>, AppError> {
    let controller = CitaController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_cita(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Cita>, AppError> {
    let controller = CitaController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_cita(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarCitaRequest>,
) -> Result<Json<ApiResponse<Cita>>, AppError> {
    let controller = CitaController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CambiarEstadoRequest>,
) -> Result<Json<ApiResponse<Cita>>, AppError> {
    let controller = CitaController::new(state.pool.clone());
    let response = controller.cambiar_estado(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_cita(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CitaController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}

/// La tabla de transiciones que la UI consulta en lugar de duplicarla
async fn transiciones_estado(
    State(state): State<AppState>,
) -> Json<Vec<TransicionesEstado>> {
    let controller = CitaController::new(state.pool.clone());
    Json(controller.transiciones())
}
