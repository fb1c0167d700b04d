use crate::dto::cita_dto::ClienteCita;
use crate::dto::orden_dto::{ActualizarTotalRequest, CambiarEstadoOrdenRequest, CrearOrdenRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::orden::{EstadoOrden, OrdenServicio};
use crate::repositories::orden_repository::OrdenRepository;
use crate::utils::errors::{not_found_error, required_field_error, AppError};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct OrdenController {
    repository: OrdenRepository,
}

impl OrdenController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OrdenRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearOrdenRequest,
    ) -> Result<ApiResponse<OrdenServicio>, AppError> {
        if let ClienteCita::NoRegistrado { nombre, .. } = &request.cliente {
            if nombre.trim().is_empty() {
                return Err(required_field_error("nombre"));
            }
        }

        if request.vehiculo.marca.trim().is_empty() {
            return Err(required_field_error("marca"));
        }
        if request.vehiculo.modelo.trim().is_empty() {
            return Err(required_field_error("modelo"));
        }

        let fecha_inicio = request
            .fecha_inicio
            .unwrap_or_else(|| Utc::now().date_naive());

        let orden = self.repository.crear(&request, fecha_inicio).await?;

        Ok(ApiResponse::success_with_message(
            orden,
            "Orden de servicio abierta exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<OrdenServicio>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<OrdenServicio, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La orden", id))
    }

    /// Fija el total de la orden: una sola vez mientras siga en 0.
    pub async fn actualizar_total(
        &self,
        id: i32,
        request: ActualizarTotalRequest,
    ) -> Result<ApiResponse<OrdenServicio>, AppError> {
        if request.total <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "El total debe ser mayor a 0".to_string(),
            ));
        }

        let orden = self.repository.actualizar_total(id, request.total).await?;

        Ok(ApiResponse::success_with_message(
            orden,
            "Total registrado exitosamente".to_string(),
        ))
    }

    /// Cambia el estado de la orden. A diferencia de las citas solo se
    /// valida la pertenencia al conjunto de estados; no hay grafo.
    pub async fn cambiar_estado(
        &self,
        id: i32,
        request: CambiarEstadoOrdenRequest,
    ) -> Result<ApiResponse<OrdenServicio>, AppError> {
        let estado = EstadoOrden::parse(&request.estado).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Estado desconocido: '{}'. Estados válidos: Pendiente, En proceso, Completada",
                request.estado
            ))
        })?;

        let orden = self.repository.cambiar_estado(id, estado).await?;

        Ok(ApiResponse::success_with_message(
            orden,
            format!("La orden pasó a \"{}\"", estado),
        ))
    }

    /// Cierra la orden: Completada con fecha de término del día.
    pub async fn finalizar(&self, id: i32) -> Result<ApiResponse<OrdenServicio>, AppError> {
        let orden = self.repository.finalizar(id).await?;

        Ok(ApiResponse::success_with_message(
            orden,
            "Orden finalizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("La orden", id));
        }

        Ok(ApiResponse::message_only(
            "Orden eliminada exitosamente".to_string(),
        ))
    }
}
