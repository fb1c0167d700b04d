use serde::Deserialize;
use validator::Validate;

// Request para registrar un vehículo de un cliente existente.
// Placa y VIN son identificadores de longitud fija; se validan aquí,
// en la frontera de entrada, no en el store.
#[derive(Debug, Deserialize, Validate)]
pub struct CrearVehiculoRequest {
    pub cliente_id: i32,

    #[validate(length(min = 1, max = 50))]
    pub marca: String,

    #[validate(length(min = 1, max = 50))]
    pub modelo: String,

    #[validate(length(equal = 7))]
    pub placa: String,

    #[validate(length(equal = 17))]
    pub vin: String,

    #[validate(range(min = 1900, max = 2100))]
    pub anio: i32,

    #[validate(range(min = 0))]
    pub kilometraje: i32,
}

// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarVehiculoRequest {
    #[validate(length(min = 1, max = 50))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub modelo: Option<String>,

    #[validate(length(equal = 7))]
    pub placa: Option<String>,

    #[validate(length(equal = 17))]
    pub vin: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub anio: Option<i32>,

    #[validate(range(min = 0))]
    pub kilometraje: Option<i32>,
}
