//! Modelo de Empleado
//!
//! Mapea a la tabla empleados más su relación muchos-a-muchos con
//! especialidades a través de empleados_especialidades.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Empleado {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub correo: Option<String>,
    pub celular: Option<String>,
    pub direccion: Option<String>,
    pub contacto_emergencia: Option<String>,
    pub telefono_emergencia: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Empleado {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// Empleado con los nombres de sus especialidades agregados (string_agg)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmpleadoConEspecialidades {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub correo: Option<String>,
    pub celular: Option<String>,
    pub direccion: Option<String>,
    pub contacto_emergencia: Option<String>,
    pub telefono_emergencia: Option<String>,
    pub created_at: DateTime<Utc>,
    pub especialidades: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Especialidad {
    pub id: i32,
    pub nombre: String,
}
