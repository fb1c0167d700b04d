use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// Request para dar de alta un servicio del catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct CrearServicioRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,

    pub descripcion: Option<String>,

    pub precio: Decimal,
}

// Request para actualizar un servicio existente
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarServicioRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,

    pub descripcion: Option<String>,

    pub precio: Option<Decimal>,
}
