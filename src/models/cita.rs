//! Modelo de Cita
//!
//! Contiene el struct Cita y la máquina de estados de su ciclo de vida.
//! La tabla de transiciones vive únicamente aquí: la ruta de actualización
//! completa, la de solo-estado y el endpoint de consulta usan esta misma
//! definición.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Estado de una cita - mapea a la columna VARCHAR `estado`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoCita {
    Pendiente,
    Confirmada,
    Completada,
    Cancelada,
}

impl EstadoCita {
    pub const TODOS: [EstadoCita; 4] = [
        EstadoCita::Pendiente,
        EstadoCita::Confirmada,
        EstadoCita::Completada,
        EstadoCita::Cancelada,
    ];

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "Pendiente" => Some(EstadoCita::Pendiente),
            "Confirmada" => Some(EstadoCita::Confirmada),
            "Completada" => Some(EstadoCita::Completada),
            "Cancelada" => Some(EstadoCita::Cancelada),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCita::Pendiente => "Pendiente",
            EstadoCita::Confirmada => "Confirmada",
            EstadoCita::Completada => "Completada",
            EstadoCita::Cancelada => "Cancelada",
        }
    }

    /// Estados alcanzables desde el estado actual.
    /// Completada y Cancelada son terminales.
    pub fn transiciones(&self) -> &'static [EstadoCita] {
        match self {
            EstadoCita::Pendiente => &[EstadoCita::Confirmada],
            EstadoCita::Confirmada => &[EstadoCita::Completada, EstadoCita::Cancelada],
            EstadoCita::Completada | EstadoCita::Cancelada => &[],
        }
    }

    pub fn puede_transicionar(&self, destino: EstadoCita) -> bool {
        self.transiciones().contains(&destino)
    }
}

impl fmt::Display for EstadoCita {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminador cliente registrado / cliente de mostrador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoCliente {
    Registrado,
    NoRegistrado,
}

impl TipoCliente {
    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "registrado" => Some(TipoCliente::Registrado),
            "no_registrado" => Some(TipoCliente::NoRegistrado),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TipoCliente::Registrado => "registrado",
            TipoCliente::NoRegistrado => "no_registrado",
        }
    }
}

/// Cita - mapea a la tabla citas. Los campos nombre_*/correo_*/telefono_*
/// son la copia tomada al crear la cita, no datos vivos.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cita {
    pub id: i32,
    pub tipo_cliente: String,
    pub cliente_id: Option<i32>,
    pub nombre_cliente: String,
    pub correo_cliente: Option<String>,
    pub telefono_cliente: Option<String>,
    pub marca_vehiculo: String,
    pub modelo_vehiculo: String,
    pub placa_vehiculo: Option<String>,
    pub servicio_id: Option<i32>,
    pub nombre_servicio: String,
    pub empleado_id: Option<i32>,
    pub nombre_empleado: String,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub descripcion: Option<String>,
    pub estado: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fila del listado de citas: la cita más el contacto resuelto contra el
/// cliente vivo cuando existe (COALESCE en el JOIN).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CitaListado {
    pub id: i32,
    pub tipo_cliente: String,
    pub cliente_id: Option<i32>,
    pub nombre_cliente: String,
    pub correo_contacto: Option<String>,
    pub telefono_contacto: Option<String>,
    pub marca_vehiculo: String,
    pub modelo_vehiculo: String,
    pub placa_vehiculo: Option<String>,
    pub servicio_id: Option<i32>,
    pub nombre_servicio: String,
    pub empleado_id: Option<i32>,
    pub nombre_empleado: String,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub descripcion: Option<String>,
    pub estado: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transiciones_legales() {
        assert!(EstadoCita::Pendiente.puede_transicionar(EstadoCita::Confirmada));
        assert!(EstadoCita::Confirmada.puede_transicionar(EstadoCita::Completada));
        assert!(EstadoCita::Confirmada.puede_transicionar(EstadoCita::Cancelada));
    }

    #[test]
    fn test_matriz_completa_de_transiciones() {
        // Las únicas aristas del grafo; todo lo demás se rechaza,
        // incluidas las auto-transiciones.
        let legales = [
            (EstadoCita::Pendiente, EstadoCita::Confirmada),
            (EstadoCita::Confirmada, EstadoCita::Completada),
            (EstadoCita::Confirmada, EstadoCita::Cancelada),
        ];

        for desde in EstadoCita::TODOS {
            for hacia in EstadoCita::TODOS {
                let esperado = legales.contains(&(desde, hacia));
                assert_eq!(
                    desde.puede_transicionar(hacia),
                    esperado,
                    "transición {} -> {}",
                    desde,
                    hacia
                );
            }
        }
    }

    #[test]
    fn test_estados_terminales_sin_salidas() {
        assert!(EstadoCita::Completada.transiciones().is_empty());
        assert!(EstadoCita::Cancelada.transiciones().is_empty());
        assert!(!EstadoCita::Completada.puede_transicionar(EstadoCita::Completada));
        assert!(!EstadoCita::Cancelada.puede_transicionar(EstadoCita::Cancelada));
    }

    #[test]
    fn test_parse_y_as_str() {
        for estado in EstadoCita::TODOS {
            assert_eq!(EstadoCita::parse(estado.as_str()), Some(estado));
        }
        assert_eq!(EstadoCita::parse("Volando"), None);
        assert_eq!(EstadoCita::parse("pendiente"), None);
    }
}
