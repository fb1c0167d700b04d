use crate::dto::empleado_dto::{ActualizarEmpleadoRequest, CrearEmpleadoRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::empleado::{EmpleadoConEspecialidades, Especialidad};
use crate::repositories::empleado_repository::EmpleadoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct EmpleadoController {
    repository: EmpleadoRepository,
}

impl EmpleadoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmpleadoRepository::new(pool),
        }
    }

    /// Alta de empleado. Una lista vacía de especialidades se rechaza
    /// antes de escribir fila alguna: no deben quedar empleados huérfanos
    /// de especialidad.
    pub async fn crear(
        &self,
        request: CrearEmpleadoRequest,
    ) -> Result<ApiResponse<EmpleadoConEspecialidades>, AppError> {
        request.validate()?;

        if request.especialidades.is_empty() {
            return Err(AppError::BadRequest(
                "El empleado debe tener al menos una especialidad".to_string(),
            ));
        }

        let empleado = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            empleado,
            "Empleado registrado exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<EmpleadoConEspecialidades>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<EmpleadoConEspecialidades, AppError> {
        self.repository
            .find_con_especialidades(id)
            .await?
            .ok_or_else(|| crate::utils::errors::not_found_error("El empleado", id))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarEmpleadoRequest,
    ) -> Result<ApiResponse<EmpleadoConEspecialidades>, AppError> {
        request.validate()?;

        if let Some(especialidades) = &request.especialidades {
            if especialidades.is_empty() {
                return Err(AppError::BadRequest(
                    "El empleado debe tener al menos una especialidad".to_string(),
                ));
            }
        }

        let empleado = self.repository.actualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            empleado,
            "Empleado actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(crate::utils::errors::not_found_error("El empleado", id));
        }

        Ok(ApiResponse::message_only(
            "Empleado eliminado exitosamente".to_string(),
        ))
    }

    pub async fn especialidades(&self) -> Result<Vec<Especialidad>, AppError> {
        self.repository.listar_especialidades().await
    }
}
