use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::respuesta::ApiResponse;
use crate::dto::vehiculo_dto::{ActualizarVehiculoRequest, CrearVehiculoRequest};
use crate::models::vehiculo::Vehiculo;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_vehiculo))
        .route("/", get(listar_vehiculos))
        .route("/cliente/:cliente_id", get(listar_por_cliente))
        .route("/:id", get(obtener_vehiculo))
        .route("/:id", put(actualizar_vehiculo))
        .route("/:id", delete(eliminar_vehiculo))
}

async fn crear_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<CrearVehiculoRequest>,
) -> Result<Json<ApiResponse<Vehiculo>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_vehiculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehiculo>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn listar_por_cliente(
    State(state): State<AppState>,
    Path(cliente_id): Path<i32>,
) -> Result<Json<Vec<Vehiculo>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.listar_por_cliente(cliente_id).await?;
    Ok(Json(response))
}

async fn obtener_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vehiculo>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarVehiculoRequest>,
) -> Result<Json<ApiResponse<Vehiculo>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}
