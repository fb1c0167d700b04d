use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ===== Proveedores =====

#[derive(Debug, Deserialize, Validate)]
pub struct CrearProveedorRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: String,

    #[validate(length(max = 150))]
    pub contacto: Option<String>,

    #[validate(length(max = 20))]
    pub telefono: Option<String>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarProveedorRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: Option<String>,

    #[validate(length(max = 150))]
    pub contacto: Option<String>,

    #[validate(length(max = 20))]
    pub telefono: Option<String>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,
}

// ===== Piezas (inventario) =====

#[derive(Debug, Deserialize, Validate)]
pub struct CrearPiezaRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,

    pub descripcion: Option<String>,

    pub precio: Decimal,

    #[validate(range(min = 0))]
    pub cantidad: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarPiezaRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,

    pub descripcion: Option<String>,

    pub precio: Option<Decimal>,

    #[validate(range(min = 0))]
    pub cantidad: Option<i32>,
}

// ===== Ingresos y egresos =====

#[derive(Debug, Deserialize, Validate)]
pub struct CrearMovimientoRequest {
    #[validate(length(min = 1, max = 150))]
    pub concepto: String,

    pub monto: Decimal,

    pub fecha: NaiveDate,

    pub descripcion: Option<String>,
}

// ===== Empresa =====

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarEmpresaRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: String,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,

    #[validate(length(max = 20))]
    pub telefono: Option<String>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 20))]
    pub rfc: Option<String>,
}
