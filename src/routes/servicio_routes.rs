use crate::controllers::servicio_controller::ServicioController;
use crate::dto::respuesta::ApiResponse;
use crate::dto::servicio_dto::{ActualizarServicioRequest, CrearServicioRequest};
use crate::models::servicio::Servicio;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_servicio_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_servicio))
        .route("/", get(listar_servicios))
        .route("/:id", get(obtener_servicio))
        .route("/:id", put(actualizar_servicio))
        .route("/:id", delete(eliminar_servicio))
}

async fn crear_servicio(
    State(state): State<AppState>,
    Json(request): Json<CrearServicioRequest>,
) -> Result<Json<ApiResponse<Servicio>>, AppError> {
    let controller = ServicioController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_servicios(
    State(state): State<AppState>,
) -> Result<Json<Vec<Servicio>>, AppError> {
    let controller = ServicioController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_servicio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Servicio>, AppError> {
    let controller = ServicioController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_servicio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarServicioRequest>,
) -> Result<Json<ApiResponse<Servicio>>, AppError> {
    let controller = ServicioController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_servicio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServicioController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}
