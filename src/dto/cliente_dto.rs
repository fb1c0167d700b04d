use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Bloque opcional de vehículo al registrar un cliente. Todos los campos
/// son opcionales en el request; el vehículo solo se inserta si el bloque
/// está completo, un bloque parcial se descarta sin error.
#[derive(Debug, Clone, Deserialize)]
pub struct VehiculoInline {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub placa: Option<String>,
    pub vin: Option<String>,
    pub anio: Option<i32>,
    pub kilometraje: Option<i32>,
}

/// Bloque de vehículo con todos los campos presentes
#[derive(Debug, Clone)]
pub struct VehiculoCompleto {
    pub marca: String,
    pub modelo: String,
    pub placa: String,
    pub vin: String,
    pub anio: i32,
    pub kilometraje: i32,
}

impl VehiculoInline {
    /// Devuelve el bloque completo solo cuando los seis campos vienen
    /// poblados; en cualquier otro caso no hay vehículo que insertar.
    pub fn completo(&self) -> Option<VehiculoCompleto> {
        Some(VehiculoCompleto {
            marca: self.marca.clone()?,
            modelo: self.modelo.clone()?,
            placa: self.placa.clone()?,
            vin: self.vin.clone()?,
            anio: self.anio?,
            kilometraje: self.kilometraje?,
        })
    }
}

// Request para registrar un cliente (con vehículo opcional)
#[derive(Debug, Deserialize, Validate)]
pub struct CrearClienteRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,

    #[validate(length(min = 1, max = 100))]
    pub apellido: String,

    pub fecha_nacimiento: Option<NaiveDate>,

    #[validate(length(max = 150))]
    pub calle: Option<String>,

    #[validate(length(max = 100))]
    pub colonia: Option<String>,

    #[validate(length(max = 100))]
    pub ciudad: Option<String>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 20))]
    pub celular: Option<String>,

    #[validate(length(max = 20))]
    pub telefono_casa: Option<String>,

    pub vehiculo: Option<VehiculoInline>,
}

// Request para actualizar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarClienteRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub apellido: Option<String>,

    pub fecha_nacimiento: Option<NaiveDate>,

    #[validate(length(max = 150))]
    pub calle: Option<String>,

    #[validate(length(max = 100))]
    pub colonia: Option<String>,

    #[validate(length(max = 100))]
    pub ciudad: Option<String>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 20))]
    pub celular: Option<String>,

    #[validate(length(max = 20))]
    pub telefono_casa: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bloque(marca: Option<&str>, vin: Option<&str>) -> VehiculoInline {
        VehiculoInline {
            marca: marca.map(String::from),
            modelo: Some("Corolla".to_string()),
            placa: Some("ABC1234".to_string()),
            vin: vin.map(String::from),
            anio: Some(2019),
            kilometraje: Some(45000),
        }
    }

    #[test]
    fn test_bloque_completo() {
        let inline = bloque(Some("Toyota"), Some("1HGCM82633A004352"));
        assert!(inline.completo().is_some());
    }

    #[test]
    fn test_bloque_parcial_se_descarta() {
        assert!(bloque(None, Some("1HGCM82633A004352")).completo().is_none());
        assert!(bloque(Some("Toyota"), None).completo().is_none());
    }
}
