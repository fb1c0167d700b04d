use crate::dto::cita_dto::{
    ActualizarCitaRequest, CambiarEstadoRequest, ClienteCita, CrearCitaRequest,
    TransicionesEstado,
};
use crate::dto::respuesta::ApiResponse;
use crate::models::cita::{Cita, CitaListado, EstadoCita};
use crate::repositories::cita_repository::CitaRepository;
use crate::utils::errors::{not_found_error, required_field_error, AppError};
use crate::utils::validation::validate_hora;
use chrono::NaiveTime;
use sqlx::PgPool;

pub struct CitaController {
    repository: CitaRepository,
}

impl CitaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CitaRepository::new(pool),
        }
    }

    /// Agenda una cita nueva. Toda la validación de campos ocurre antes de
    /// tocar la base; el estado inicial siempre es Pendiente.
    pub async fn crear(&self, request: CrearCitaRequest) -> Result<ApiResponse<Cita>, AppError> {
        let hora = Self::parsear_hora(&request.hora)?;

        if let ClienteCita::NoRegistrado {
            nombre,
            correo,
            telefono,
        } = &request.cliente
        {
            if nombre.trim().is_empty() {
                return Err(required_field_error("nombre"));
            }
            // Para un cliente de mostrador el contacto del request es la
            // única fuente; sin él la cita quedaría incontactable.
            if correo.as_deref().map_or(true, |c| c.trim().is_empty()) {
                return Err(required_field_error("correo"));
            }
            if telefono.as_deref().map_or(true, |t| t.trim().is_empty()) {
                return Err(required_field_error("telefono"));
            }
        }

        if request.vehiculo.marca.trim().is_empty() {
            return Err(required_field_error("marca"));
        }
        if request.vehiculo.modelo.trim().is_empty() {
            return Err(required_field_error("modelo"));
        }

        let cita = self.repository.crear(&request, hora).await?;

        Ok(ApiResponse::success_with_message(
            cita,
            "Cita agendada exitosamente".to_string(),
        ))
    }

    pub async fn listar(&self) -> Result<Vec<CitaListado>, AppError> {
        self.repository.listar().await
    }

    pub async fn obtener(&self, id: i32) -> Result<Cita, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La cita", id))
    }

    /// Cambia el estado de la cita aplicando la tabla de transiciones.
    pub async fn cambiar_estado(
        &self,
        id: i32,
        request: CambiarEstadoRequest,
    ) -> Result<ApiResponse<Cita>, AppError> {
        let destino = EstadoCita::parse(&request.estado).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Estado desconocido: '{}'. Estados válidos: Pendiente, Confirmada, Completada, Cancelada",
                request.estado
            ))
        })?;

        let cita = self.repository.cambiar_estado(id, destino).await?;

        Ok(ApiResponse::success_with_message(
            cita,
            format!("La cita pasó a \"{}\"", destino),
        ))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarCitaRequest,
    ) -> Result<ApiResponse<Cita>, AppError> {
        let hora = match &request.hora {
            Some(valor) => Some(Self::parsear_hora(valor)?),
            None => None,
        };

        let cita = self.repository.actualizar(id, &request, hora).await?;

        Ok(ApiResponse::success_with_message(
            cita,
            "Cita actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.eliminar(id).await? {
            return Err(not_found_error("La cita", id));
        }

        Ok(ApiResponse::message_only(
            "Cita eliminada exitosamente".to_string(),
        ))
    }

    /// Tabla de transiciones para el frontend: la misma definición que
    /// aplica la escritura, no una copia.
    pub fn transiciones(&self) -> Vec<TransicionesEstado> {
        EstadoCita::TODOS
            .iter()
            .map(|estado| TransicionesEstado {
                estado: *estado,
                siguientes: estado.transiciones(),
            })
            .collect()
    }

    fn parsear_hora(valor: &str) -> Result<NaiveTime, AppError> {
        validate_hora(valor)
            .map_err(|_| AppError::BadRequest(format!("Hora inválida: '{}' (formato HH:MM)", valor)))
    }
}
