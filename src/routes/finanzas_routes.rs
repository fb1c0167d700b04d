use crate::controllers::finanzas_controller::FinanzasController;
use crate::dto::catalogo_dto::CrearMovimientoRequest;
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Movimiento;
use crate::repositories::finanzas_repository::TipoMovimiento;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

pub fn create_ingreso_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_ingreso))
        .route("/", get(listar_ingresos))
        .route("/:id", delete(eliminar_ingreso))
}

pub fn create_egreso_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_egreso))
        .route("/", get(listar_egresos))
        .route("/:id", delete(eliminar_egreso))
}

async fn crear_ingreso(
    State(state): State<AppState>,
    Json(request): Json<CrearMovimientoRequest>,
) -> Result<Json<ApiResponse<Movimiento>>, AppError> {
    let controller = FinanzasController::new(state.pool.clone());
    let response = controller.crear(TipoMovimiento::Ingreso, request).await?;
    Ok(Json(response))
}

async fn listar_ingresos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movimiento>>, AppError> {
    let controller = FinanzasController::new(state.pool.clone());
    let response = controller.listar(TipoMovimiento::Ingreso).await?;
    Ok(Json(response))
}

async fn eliminar_ingreso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FinanzasController::new(state.pool.clone());
    let response = controller.eliminar(TipoMovimiento::Ingreso, id).await?;
    Ok(Json(response))
}

async fn crear_egreso(
    State(state): State<AppState>,
    Json(request): Json<CrearMovimientoRequest>,
) -> Result<Json<ApiResponse<Movimiento>>, AppError> {
    let controller = FinanzasController::new(state.pool.clone());
    let response = controller.crear(TipoMovimiento::Egreso, request).await?;
    Ok(Json(response))
}

async fn listar_egresos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movimiento>>, AppError> {
    let controller = FinanzasController::new(state.pool.clone());
    let response = controller.listar(TipoMovimiento::Egreso).await?;
    Ok(Json(response))
}

async fn eliminar_egreso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FinanzasController::new(state.pool.clone());
    let response = controller.eliminar(TipoMovimiento::Egreso, id).await?;
    Ok(Json(response))
}
