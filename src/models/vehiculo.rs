//! Modelo de Vehículo
//!
//! Mapea a la tabla vehiculos. Cada vehículo pertenece a exactamente un
//! cliente. La placa (7 caracteres) y el VIN (17) se validan en la capa
//! de entrada, no aquí.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehiculo {
    pub id: i32,
    pub cliente_id: i32,
    pub marca: String,
    pub modelo: String,
    pub placa: String,
    pub vin: String,
    pub anio: i32,
    pub kilometraje: i32,
    pub created_at: DateTime<Utc>,
}
