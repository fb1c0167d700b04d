//! Conexión a PostgreSQL
//!
//! El pool se construye aquí una vez al arrancar el proceso y se inyecta a
//! través de `AppState`; ningún módulo mantiene conexiones globales.

use crate::config::database::DatabaseConfig;
use anyhow::Result;
use sqlx::PgPool;

/// Conexión a la base de datos con su pool asociado
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear la conexión usando la configuración del entorno
    pub async fn new_default() -> Result<Self> {
        let config = DatabaseConfig::default();
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    /// Crear la conexión con una configuración explícita
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
