//! Modelo de Historial de servicios
//!
//! Una fila de historial es la constancia de un servicio terminado, ya sea
//! de un cliente registrado (llaves foráneas a clientes/vehiculos) o de un
//! cliente de mostrador (campos en línea). El discriminador tipo_cliente
//! decide qué forma está poblada; la tabla lo refuerza con un CHECK.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Fila plana del historial con el LEFT JOIN a clientes y vehiculos ya
/// resuelto. Es la entrada del armador de árbol en historial_service.
#[derive(Debug, Clone, FromRow)]
pub struct HistorialRow {
    pub id: i32,
    pub tipo_cliente: String,
    pub cliente_id: Option<i32>,
    pub vehiculo_id: Option<i32>,
    pub nombre_cliente: Option<String>,
    pub telefono_cliente: Option<String>,
    pub marca_vehiculo: Option<String>,
    pub modelo_vehiculo: Option<String>,
    pub anio_vehiculo: Option<i32>,
    pub nombre_servicio: String,
    pub descripcion: Option<String>,
    pub fecha: NaiveDate,
    pub pdf_path: String,
    // Columnas del JOIN (solo pobladas para clientes registrados)
    pub cliente_nombre: Option<String>,
    pub cliente_apellido: Option<String>,
    pub cliente_celular: Option<String>,
    pub veh_marca: Option<String>,
    pub veh_modelo: Option<String>,
    pub veh_anio: Option<i32>,
    pub veh_placa: Option<String>,
}

/// Registro de historial tal como está en la tabla
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Historial {
    pub id: i32,
    pub tipo_cliente: String,
    pub cliente_id: Option<i32>,
    pub vehiculo_id: Option<i32>,
    pub nombre_cliente: Option<String>,
    pub telefono_cliente: Option<String>,
    pub marca_vehiculo: Option<String>,
    pub modelo_vehiculo: Option<String>,
    pub anio_vehiculo: Option<i32>,
    pub nombre_servicio: String,
    pub descripcion: Option<String>,
    pub fecha: NaiveDate,
    pub pdf_path: String,
    pub created_at: DateTime<Utc>,
}

/// Hoja del árbol: un servicio realizado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicioHistorial {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub fecha: NaiveDate,
    pub pdf_path: String,
}

/// Nodo intermedio: un vehículo con sus servicios
#[derive(Debug, Clone, Serialize)]
pub struct VehiculoHistorial {
    pub vehiculo_id: Option<i32>,
    pub marca: String,
    pub modelo: String,
    pub anio: Option<i32>,
    pub placa: Option<String>,
    pub servicios: Vec<ServicioHistorial>,
}

/// Nodo raíz: un cliente con sus vehículos.
/// Para clientes de mostrador cada fila de historial es su propio nodo,
/// porque no existe identidad estable entre registros.
#[derive(Debug, Clone, Serialize)]
pub struct ClienteHistorial {
    pub id: i32,
    pub tipo_cliente: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub vehiculos: Vec<VehiculoHistorial>,
}
