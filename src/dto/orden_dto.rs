use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::dto::cita_dto::{ClienteCita, VehiculoCita};

// Request para abrir una orden de servicio. Mismo bloque de cliente
// etiquetado que las citas; el total arranca en 0.
#[derive(Debug, Deserialize)]
pub struct CrearOrdenRequest {
    pub cliente: ClienteCita,
    pub vehiculo: VehiculoCita,
    pub servicio_id: i32,
    pub empleado_id: i32,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
}

// Request para fijar el total de la orden (una sola vez)
#[derive(Debug, Deserialize)]
pub struct ActualizarTotalRequest {
    pub total: Decimal,
}

// Request para cambiar el estado de la orden
#[derive(Debug, Deserialize)]
pub struct CambiarEstadoOrdenRequest {
    pub estado: String,
}
