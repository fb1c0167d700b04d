use crate::controllers::proveedor_controller::ProveedorController;
use crate::dto::catalogo_dto::{ActualizarProveedorRequest, CrearProveedorRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Proveedor;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_proveedor_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_proveedor))
        .route("/", get(listar_proveedores))
        .route("/:id", get(obtener_proveedor))
        .route("/:id", put(actualizar_proveedor))
        .route("/:id", delete(eliminar_proveedor))
}

async fn crear_proveedor(
    State(state): State<AppState>,
    Json(request): Json<CrearProveedorRequest>,
) -> Result<Json<ApiResponse<Proveedor>>, AppError> {
    let controller = ProveedorController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_proveedores(
    State(state): State<AppState>,
) -> Result<Json<Vec<Proveedor>>, AppError> {
    let controller = ProveedorController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_proveedor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Proveedor>, AppError> {
    let controller = ProveedorController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_proveedor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarProveedorRequest>,
) -> Result<Json<ApiResponse<Proveedor>>, AppError> {
    let controller = ProveedorController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_proveedor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ProveedorController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}
