//! Módulo de base de datos
//!
//! Construcción del pool de PostgreSQL que se inyecta vía AppState.

pub mod connection;

pub use connection::DatabaseConnection;
