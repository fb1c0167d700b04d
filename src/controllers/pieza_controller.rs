use crate::dto::catalogo_dto::{ActualizarPiezaRequest, CrearPiezaRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Pieza;
use crate::repositories::pieza_repository::PiezaRepository;
use crate::utils::errors::{not_found_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

pub struct PiezaController {
    repository: PiezaRepository,
}

impl PiezaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PiezaRepository::new(pool),
        }
    }

    pub async fn crear(&self, request: CrearPiezaRequest) -> Result<ApiResponse<Pieza>, AppError> {
        request.validate()?;

        if request.precio < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let pieza = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            pieza,
            "Pieza registrada exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<Pieza>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<Pieza, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La pieza", id))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarPiezaRequest,
    ) -> Result<ApiResponse<Pieza>, AppError> {
        request.validate()?;

        if request.precio.is_some_and(|p| p < Decimal::ZERO) {
            return Err(AppError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let pieza = self.repository.actualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            pieza,
            "Pieza actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("La pieza", id));
        }

        Ok(ApiResponse::message_only(
            "Pieza eliminada exitosamente".to_string(),
        ))
    }
}
