use crate::dto::catalogo_dto::ActualizarEmpresaRequest;
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Empresa;
use crate::repositories::empresa_repository::EmpresaRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct EmpresaController {
    repository: EmpresaRepository,
}

impl EmpresaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmpresaRepository::new(pool),
        }
    }

    pub async fn obtener(&self) -> Result<Empresa, AppError> {
        self.repository
            .obtener()
            .await?
            .ok_or_else(|| AppError::NotFound("El perfil de la empresa no está configurado".to_string()))
    }

    pub async fn guardar(
        &self,
        request: ActualizarEmpresaRequest,
    ) -> Result<ApiResponse<Empresa>, AppError> {
        request.validate()?;

        let empresa = self.repository.guardar(&request).await?;

        Ok(ApiResponse::success_with_message(
            empresa,
            "Perfil de la empresa actualizado".to_string(),
        ))
    }
}
