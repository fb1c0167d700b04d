use crate::dto::cliente_dto::{ActualizarClienteRequest, CrearClienteRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::cliente::Cliente;
use crate::models::vehiculo::Vehiculo;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{validate_placa, validate_vin};
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

/// Cliente recién registrado con su vehículo opcional
#[derive(Debug, Serialize)]
pub struct ClienteConVehiculo {
    #[serde(flatten)]
    pub cliente: Cliente,
    pub vehiculo: Option<Vehiculo>,
}

/// Cliente con todos sus vehículos, para la vista de detalle
#[derive(Debug, Serialize)]
pub struct ClienteDetalle {
    #[serde(flatten)]
    pub cliente: Cliente,
    pub vehiculos: Vec<Vehiculo>,
}

pub struct ClienteController {
    repository: ClienteRepository,
    vehiculos: VehiculoRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool.clone()),
            vehiculos: VehiculoRepository::new(pool),
        }
    }

    /// Registra un cliente. Si el bloque de vehículo viene completo se
    /// inserta en la misma transacción; un bloque parcial se descarta sin
    /// error. Placa y VIN se validan aquí cuando el bloque está completo.
    pub async fn crear(
        &self,
        request: CrearClienteRequest,
    ) -> Result<ApiResponse<ClienteConVehiculo>, AppError> {
        request.validate()?;

        let vehiculo = request.vehiculo.as_ref().and_then(|v| v.completo());

        if let Some(v) = &vehiculo {
            validate_placa(&v.placa).map_err(|_| {
                AppError::BadRequest(format!(
                    "La placa '{}' debe tener exactamente 7 caracteres",
                    v.placa
                ))
            })?;
            validate_vin(&v.vin).map_err(|_| {
                AppError::BadRequest(format!(
                    "El VIN '{}' debe tener exactamente 17 caracteres",
                    v.vin
                ))
            })?;
        }

        let (cliente, vehiculo) = self.repository.crear(&request, vehiculo.as_ref()).await?;

        Ok(ApiResponse::success_with_message(
            ClienteConVehiculo { cliente, vehiculo },
            "Cliente registrado exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<ClienteDetalle, AppError> {
        let cliente = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El cliente", id))?;

        let vehiculos = self.vehiculos.listar_por_cliente(id).await?;

        Ok(ClienteDetalle { cliente, vehiculos })
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarClienteRequest,
    ) -> Result<ApiResponse<Cliente>, AppError> {
        request.validate()?;

        let cliente = self.repository.actualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            cliente,
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    /// Baja de cliente: elimina sus vehículos y después la fila del
    /// cliente, atómicamente.
    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("El cliente", id));
        }

        Ok(ApiResponse::message_only(
            "Cliente eliminado exitosamente".to_string(),
        ))
    }
}
