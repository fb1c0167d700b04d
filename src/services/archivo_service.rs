//! Almacenamiento de los PDF del historial
//!
//! Los archivos se guardan bajo un nombre UUID dentro del directorio de
//! subidas. El borrado es de mejor esfuerzo: si el archivo ya no está,
//! se registra y la operación principal sigue adelante.

use crate::utils::errors::AppError;
use std::path::PathBuf;
use uuid::Uuid;

pub struct ArchivoService {
    dir: PathBuf,
}

impl ArchivoService {
    pub fn new(uploads_dir: &str) -> Self {
        Self {
            dir: PathBuf::from(uploads_dir),
        }
    }

    /// Guarda el contenido de un PDF y devuelve la ruta almacenada
    pub async fn guardar_pdf(&self, contenido: &[u8]) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::Internal(format!("No se pudo crear el directorio de subidas: {}", e)))?;

        let nombre = format!("{}.pdf", Uuid::new_v4());
        let ruta = self.dir.join(&nombre);

        tokio::fs::write(&ruta, contenido)
            .await
            .map_err(|e| AppError::Internal(format!("No se pudo guardar el PDF: {}", e)))?;

        Ok(ruta.to_string_lossy().into_owned())
    }

    /// Intenta borrar un PDF. Un fallo aquí nunca revierte ni hace fallar
    /// la operación que ya borró el registro: solo se deja constancia.
    pub async fn eliminar_pdf(&self, ruta: &str) {
        if let Err(e) = tokio::fs::remove_file(ruta).await {
            tracing::warn!("No se pudo eliminar el PDF '{}': {}", ruta, e);
        }
    }

    /// Borra en lote, con la misma política de mejor esfuerzo
    pub async fn eliminar_pdfs(&self, rutas: &[String]) {
        for ruta in rutas {
            self.eliminar_pdf(ruta).await;
        }
    }
}
