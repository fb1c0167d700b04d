//! Modelo de Orden de Servicio
//!
//! Una orden modela trabajo en curso o terminado, a diferencia de la cita
//! que es una reserva futura. El total arranca en 0 y solo puede fijarse
//! una vez; el estado es una membresía simple, sin grafo de transiciones.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Estado de una orden - Pendiente / En proceso / Completada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoOrden {
    Pendiente,
    #[serde(rename = "En proceso")]
    EnProceso,
    Completada,
}

impl EstadoOrden {
    pub const TODOS: [EstadoOrden; 3] = [
        EstadoOrden::Pendiente,
        EstadoOrden::EnProceso,
        EstadoOrden::Completada,
    ];

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "Pendiente" => Some(EstadoOrden::Pendiente),
            "En proceso" => Some(EstadoOrden::EnProceso),
            "Completada" => Some(EstadoOrden::Completada),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoOrden::Pendiente => "Pendiente",
            EstadoOrden::EnProceso => "En proceso",
            EstadoOrden::Completada => "Completada",
        }
    }
}

impl fmt::Display for EstadoOrden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orden de servicio - mapea a la tabla ordenes_servicio
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrdenServicio {
    pub id: i32,
    pub tipo_cliente: String,
    pub cliente_id: Option<i32>,
    pub nombre_cliente: String,
    pub telefono_cliente: Option<String>,
    pub marca_vehiculo: String,
    pub modelo_vehiculo: String,
    pub placa_vehiculo: Option<String>,
    pub servicio_id: Option<i32>,
    pub nombre_servicio: String,
    pub empleado_id: Option<i32>,
    pub nombre_empleado: String,
    pub descripcion: Option<String>,
    pub total: Decimal,
    pub estado: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estados() {
        assert_eq!(EstadoOrden::parse("Pendiente"), Some(EstadoOrden::Pendiente));
        assert_eq!(EstadoOrden::parse("En proceso"), Some(EstadoOrden::EnProceso));
        assert_eq!(EstadoOrden::parse("Completada"), Some(EstadoOrden::Completada));
        assert_eq!(EstadoOrden::parse("Facturada"), None);
    }
}
