use crate::dto::catalogo_dto::{ActualizarProveedorRequest, CrearProveedorRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Proveedor;
use crate::repositories::proveedor_repository::ProveedorRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct ProveedorController {
    repository: ProveedorRepository,
}

impl ProveedorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ProveedorRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearProveedorRequest,
    ) -> Result<ApiResponse<Proveedor>, AppError> {
        request.validate()?;

        let proveedor = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            proveedor,
            "Proveedor registrado exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<Proveedor>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<Proveedor, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El proveedor", id))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarProveedorRequest,
    ) -> Result<ApiResponse<Proveedor>, AppError> {
        request.validate()?;

        let proveedor = self.repository.actualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            proveedor,
            "Proveedor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("El proveedor", id));
        }

        Ok(ApiResponse::message_only(
            "Proveedor eliminado exitosamente".to_string(),
        ))
    }
}
