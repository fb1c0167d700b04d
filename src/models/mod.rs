//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod auth;
pub mod catalogo;
pub mod cita;
pub mod cliente;
pub mod empleado;
pub mod historial;
pub mod orden;
pub mod servicio;
pub mod vehiculo;
