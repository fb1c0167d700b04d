//! Modelo de Cliente
//!
//! Mapea a la tabla clientes. Un cliente posee cero o más vehículos
//! (llave foránea en vehiculos).

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cliente {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub calle: Option<String>,
    pub colonia: Option<String>,
    pub ciudad: Option<String>,
    pub correo: Option<String>,
    pub celular: Option<String>,
    pub telefono_casa: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Cliente {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}
