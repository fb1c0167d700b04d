use crate::controllers::empleado_controller::EmpleadoController;
use crate::dto::empleado_dto::{ActualizarEmpleadoRequest, CrearEmpleadoRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::empleado::{EmpleadoConEspecialidades, Especialidad};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_empleado_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_empleado))
        .route("/", get(listar_empleados))
        .route("/especialidades", get(listar_especialidades))
        .route("/:id", get(obtener_empleado))
        .route("/:id", put(actualizar_empleado))
        .route("/:id", delete(eliminar_empleado))
}

async fn crear_empleado(
    State(state): State<AppState>,
    Json(request): Json<CrearEmpleadoRequest>,
) -> Result<Json<ApiResponse<EmpleadoConEspecialidades>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn listar_empleados(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmpleadoConEspecialidades>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn obtener_empleado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EmpleadoConEspecialidades>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn actualizar_empleado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarEmpleadoRequest>,
) -> Result<Json<ApiResponse<EmpleadoConEspecialidades>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_empleado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.eliminar(id).await?;
    Ok(Json(response))
}

async fn listar_especialidades(
    State(state): State<AppState>,
) -> Result<Json<Vec<Especialidad>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.especialidades().await?;
    Ok(Json(response))
}
