//! Rutas del historial de servicios
//!
//! El alta llega como multipart/form-data: los campos del registro más un
//! PDF obligatorio. El router impone el tope de tamaño y el tiempo máximo
//! de la subida; todo lo demás vive en el controlador.

use crate::config::environment::EnvironmentConfig;
use crate::controllers::historial_controller::HistorialController;
use crate::dto::historial_dto::{ClienteHistorialDatos, CrearHistorialRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::cita::TipoCliente;
use crate::models::historial::{ClienteHistorial, Historial};
use crate::state::AppState;
use crate::utils::errors::{required_field_error, AppError};
use crate::utils::validation::validate_fecha;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

pub fn create_historial_router(config: &EnvironmentConfig) -> Router<AppState> {
    Router::new()
        .route("/", post(crear_historial))
        .route("/", get(listar_historial))
        .route("/servicio/:id", delete(eliminar_servicio))
        .route("/cliente/:id", delete(eliminar_cliente))
        .route("/vehiculo/:id", delete(eliminar_vehiculo))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.upload_timeout_secs,
        )))
}

async fn crear_historial(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Historial>>, AppError> {
    let mut campos: HashMap<String, String> = HashMap::new();
    let mut pdf: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart inválido: {}", e)))?
    {
        let nombre = field.name().unwrap_or_default().to_string();

        if nombre == "pdf" {
            let contenido = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("No se pudo leer el PDF: {}", e)))?;
            pdf = Some(contenido.to_vec());
        } else {
            let valor = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Campo '{}' ilegible: {}", nombre, e)))?;
            campos.insert(nombre, valor);
        }
    }

    // El PDF es obligatorio: se rechaza aquí, antes de persistir nada
    let pdf = pdf.filter(|datos| !datos.is_empty()).ok_or_else(|| {
        AppError::BadRequest("El archivo PDF es obligatorio".to_string())
    })?;

    let request = armar_request(&campos)?;

    let controller = HistorialController::new(state.pool.clone(), &state.config);
    let response = controller.crear(request, &pdf).await?;
    Ok(Json(response))
}

async fn listar_historial(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClienteHistorial>>, AppError> {
    let controller = HistorialController::new(state.pool.clone(), &state.config);
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn eliminar_servicio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = HistorialController::new(state.pool.clone(), &state.config);
    let response = controller.eliminar_servicio(id).await?;
    Ok(Json(response))
}

async fn eliminar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = HistorialController::new(state.pool.clone(), &state.config);
    let response = controller.eliminar_cliente(id).await?;
    Ok(Json(response))
}

async fn eliminar_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = HistorialController::new(state.pool.clone(), &state.config);
    let response = controller.eliminar_vehiculo(id).await?;
    Ok(Json(response))
}

/// Arma el request desde los campos de texto del multipart, eligiendo la
/// forma según el discriminador tipo_cliente.
fn armar_request(campos: &HashMap<String, String>) -> Result<CrearHistorialRequest, AppError> {
    let tipo = campos
        .get("tipo_cliente")
        .ok_or_else(|| required_field_error("tipo_cliente"))?;

    let cliente = match TipoCliente::parse(tipo) {
        Some(TipoCliente::Registrado) => ClienteHistorialDatos::Registrado {
            cliente_id: campo_entero(campos, "cliente_id")?,
            vehiculo_id: campo_entero(campos, "vehiculo_id")?,
        },
        Some(TipoCliente::NoRegistrado) => ClienteHistorialDatos::NoRegistrado {
            nombre: campo_requerido(campos, "nombre_cliente")?,
            telefono: campos.get("telefono_cliente").cloned(),
            marca: campo_requerido(campos, "marca_vehiculo")?,
            modelo: campo_requerido(campos, "modelo_vehiculo")?,
            anio: campos
                .get("anio_vehiculo")
                .map(|v| {
                    v.parse::<i32>().map_err(|_| {
                        AppError::BadRequest(format!("anio_vehiculo inválido: '{}'", v))
                    })
                })
                .transpose()?,
        },
        None => {
            return Err(AppError::BadRequest(format!(
                "tipo_cliente desconocido: '{}'",
                tipo
            )))
        }
    };

    let fecha_texto = campo_requerido(campos, "fecha")?;
    let fecha = validate_fecha(&fecha_texto).map_err(|_| {
        AppError::BadRequest(format!(
            "Fecha inválida: '{}' (formato YYYY-MM-DD)",
            fecha_texto
        ))
    })?;

    Ok(CrearHistorialRequest {
        cliente,
        nombre_servicio: campo_requerido(campos, "nombre_servicio")?,
        descripcion: campos.get("descripcion").cloned(),
        fecha,
    })
}

fn campo_requerido(campos: &HashMap<String, String>, nombre: &str) -> Result<String, AppError> {
    campos
        .get(nombre)
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .ok_or_else(|| required_field_error(nombre))
}

fn campo_entero(campos: &HashMap<String, String>, nombre: &str) -> Result<i32, AppError> {
    let valor = campo_requerido(campos, nombre)?;
    valor
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("El campo '{}' debe ser un entero", nombre)))
}
