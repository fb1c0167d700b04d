use crate::dto::respuesta::ApiResponse;
use crate::dto::vehiculo_dto::{ActualizarVehiculoRequest, CrearVehiculoRequest};
use crate::models::vehiculo::Vehiculo;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct VehiculoController {
    repository: VehiculoRepository,
    clientes: ClienteRepository,
}

impl VehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehiculoRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearVehiculoRequest,
    ) -> Result<ApiResponse<Vehiculo>, AppError> {
        request.validate()?;

        // El dueño debe existir antes de colgar el vehículo
        if self.clientes.find_by_id(request.cliente_id).await?.is_none() {
            return Err(not_found_error("El cliente", request.cliente_id));
        }

        let vehiculo = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            vehiculo,
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<Vehiculo>, AppError> {
        self.repository.listar().await
    }

    pub async fn listar_por_cliente(&self, cliente_id: i32) -> Result<Vec<Vehiculo>, AppError> {
        self.repository.listar_por_cliente(cliente_id).await
    }

    pub async fn obtener(&self, id: i32) -> Result<Vehiculo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El vehículo", id))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarVehiculoRequest,
    ) -> Result<ApiResponse<Vehiculo>, AppError> {
        request.validate()?;

        let vehiculo = self.repository.actualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            vehiculo,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("El vehículo", id));
        }

        Ok(ApiResponse::message_only(
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}
