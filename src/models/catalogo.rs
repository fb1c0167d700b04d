//! Modelos del catálogo simple: proveedores, piezas, ingresos, egresos
//! y el perfil de la empresa. Validación de campos y nada más.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Proveedor {
    pub id: i32,
    pub nombre: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub direccion: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Pieza de inventario con existencias
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pieza {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Decimal,
    pub cantidad: i32,
    pub created_at: DateTime<Utc>,
}

/// Movimiento financiero (la misma forma para ingresos y egresos)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movimiento {
    pub id: i32,
    pub concepto: String,
    pub monto: Decimal,
    pub fecha: NaiveDate,
    pub descripcion: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Perfil de la empresa (fila única)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Empresa {
    pub id: i32,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub rfc: Option<String>,
    pub updated_at: DateTime<Utc>,
}
