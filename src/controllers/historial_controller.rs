use crate::config::environment::EnvironmentConfig;
use crate::dto::historial_dto::{ClienteHistorialDatos, CrearHistorialRequest};
use crate::dto::respuesta::ApiResponse;
use crate::models::historial::{ClienteHistorial, Historial};
use crate::repositories::historial_repository::HistorialRepository;
use crate::services::archivo_service::ArchivoService;
use crate::services::historial_service::construir_arbol;
use crate::utils::errors::{not_found_error, required_field_error, AppError};
use sqlx::PgPool;

pub struct HistorialController {
    repository: HistorialRepository,
    archivos: ArchivoService,
}

impl HistorialController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: HistorialRepository::new(pool),
            archivos: ArchivoService::new(&config.uploads_dir),
        }
    }

    /// Registra un servicio terminado. El PDF es obligatorio y se rechaza
    /// antes de persistir nada; si la inserción falla después de guardar
    /// el archivo, el archivo se limpia.
    pub async fn crear(
        &self,
        request: CrearHistorialRequest,
        pdf: &[u8],
    ) -> Result<ApiResponse<Historial>, AppError> {
        if pdf.is_empty() {
            return Err(AppError::BadRequest(
                "El archivo PDF es obligatorio".to_string(),
            ));
        }

        if request.nombre_servicio.trim().is_empty() {
            return Err(required_field_error("nombre_servicio"));
        }

        if let ClienteHistorialDatos::NoRegistrado {
            nombre,
            marca,
            modelo,
            ..
        } = &request.cliente
        {
            if nombre.trim().is_empty() {
                return Err(required_field_error("nombre_cliente"));
            }
            if marca.trim().is_empty() {
                return Err(required_field_error("marca_vehiculo"));
            }
            if modelo.trim().is_empty() {
                return Err(required_field_error("modelo_vehiculo"));
            }
        }

        let ruta = self.archivos.guardar_pdf(pdf).await?;

        match self.repository.crear(&request, &ruta).await {
            Ok(registro) => Ok(ApiResponse::success_with_message(
                registro,
                "Servicio registrado en el historial".to_string(),
            )),
            Err(e) => {
                self.archivos.eliminar_pdf(&ruta).await;
                Err(e)
            }
        }
    }

    /// Árbol Cliente → Vehículo → Servicio listo para presentación
    pub async fn listar(&self) -> Result<Vec<ClienteHistorial>, AppError> {
        let filas = self.repository.listar_filas().await?;
        Ok(construir_arbol(filas))
    }

    /// Elimina un servicio del historial y, de mejor esfuerzo, su PDF.
    pub async fn eliminar_servicio(&self, id: i32) -> Result<ApiResponse<()>, AppError> {
        let pdf = self
            .repository
            .eliminar_servicio(id)
            .await?
            .ok_or_else(|| not_found_error("El registro de historial", id))?;

        self.archivos.eliminar_pdf(&pdf).await;

        Ok(ApiResponse::message_only(
            "Registro de historial eliminado".to_string(),
        ))
    }

    /// Elimina todo el historial de un cliente registrado junto con sus
    /// PDF (estos últimos de mejor esfuerzo).
    pub async fn eliminar_cliente(&self, cliente_id: i32) -> Result<ApiResponse<()>, AppError> {
        let pdfs = self.repository.eliminar_por_cliente(cliente_id).await?;

        if pdfs.is_empty() {
            return Err(AppError::NotFound(format!(
                "El cliente {} no tiene historial",
                cliente_id
            )));
        }

        self.archivos.eliminar_pdfs(&pdfs).await;

        Ok(ApiResponse::message_only(format!(
            "Se eliminaron {} registros del historial",
            pdfs.len()
        )))
    }

    /// Elimina el historial de un vehículo con la misma política.
    pub async fn eliminar_vehiculo(&self, vehiculo_id: i32) -> Result<ApiResponse<()>, AppError> {
        let pdfs = self.repository.eliminar_por_vehiculo(vehiculo_id).await?;

        if pdfs.is_empty() {
            return Err(AppError::NotFound(format!(
                "El vehículo {} no tiene historial",
                vehiculo_id
            )));
        }

        self.archivos.eliminar_pdfs(&pdfs).await;

        Ok(ApiResponse::message_only(format!(
            "Se eliminaron {} registros del historial",
            pdfs.len()
        )))
    }
}
