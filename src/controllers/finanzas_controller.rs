use crate::dto::catalogo_dto::CrearMovimientoRequest;
use crate::dto::respuesta::ApiResponse;
use crate::models::catalogo::Movimiento;
use crate::repositories::finanzas_repository::{FinanzasRepository, TipoMovimiento};
use crate::utils::errors::{not_found_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

pub struct FinanzasController {
    repository: FinanzasRepository,
}

impl FinanzasController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FinanzasRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        tipo: TipoMovimiento,
        request: CrearMovimientoRequest,
    ) -> Result<ApiResponse<Movimiento>, AppError> {
        request.validate()?;

        if request.monto <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "El monto debe ser mayor a 0".to_string(),
            ));
        }

        let movimiento = self.repository.crear(tipo, &request).await?;

        Ok(ApiResponse::success_with_message(
            movimiento,
            "Movimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self, tipo: TipoMovimiento) -> Result<Vec<Movimiento>, AppError> {
        self.repository.listar(tipo).await
    }

    pub async fn eliminar(
        &self,
        tipo: TipoMovimiento,
        id: i32,
    ) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(tipo, id).await? {
            return Err(not_found_error("El movimiento", id));
        }

        Ok(ApiResponse::message_only(
            "Movimiento eliminado exitosamente".to_string(),
        ))
    }
}
