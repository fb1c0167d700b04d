use crate::dto::respuesta::ApiResponse;
use crate::dto::servicio_dto::{ActualizarServicioRequest, CrearServicioRequest};
use crate::models::servicio::Servicio;
use crate::repositories::servicio_repository::ServicioRepository;
use crate::utils::errors::{not_found_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

pub struct ServicioController {
    repository: ServicioRepository,
}

impl ServicioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServicioRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearServicioRequest,
    ) -> Result<ApiResponse<Servicio>, AppError> {
        request.validate()?;

        if request.precio < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let servicio = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            servicio,
            "Servicio registrado exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<Servicio>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<Servicio, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El servicio", id))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarServicioRequest,
    ) -> Result<ApiResponse<Servicio>, AppError> {
        request.validate()?;

        if request.precio.is_some_and(|p| p < Decimal::ZERO) {
            return Err(AppError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let servicio = self.repository.actualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            servicio,
            "Servicio actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("El servicio", id));
        }

        Ok(ApiResponse::message_only(
            "Servicio eliminado exitosamente".to_string(),
        ))
    }
}
