use crate::controllers::cliente_controller::{ClienteConVehiculo, ClienteController, ClienteDetalle};
use crate::dto::cliente_dto::{ActualizarClienteRequest, CrearClienteRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::cliente::Cliente;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_cliente))
        .route("/", get(listar_clientes))
        .route("/:id", get(obtener_cliente))
        .route("/:id", put(actualizar_cliente))
        .route("/:id", delete(eliminar_cliente))
}

async fn crear_cliente(
    State(state): State<AppState>,
    Json(request): Json<CrearClienteRequest>,
) -> Result<Json<ApiResponse<ClienteConVehiculo>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_clientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ClienteDetalle>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarClienteRequest>,
) -> Result<Json<ApiResponse<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}
