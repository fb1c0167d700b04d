//! Modelos de autenticación

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Usuario del sistema - mapea a la tabla usuarios
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i32,
    pub nombre_usuario: String,
    pub correo: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: i32,
    pub nombre_usuario: String,
    pub exp: i64,
    pub iat: i64,
}

/// Identidad resuelta del portador del token; el middleware la inserta en
/// las extensiones del request antes de que corra cualquier handler.
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioActual {
    pub id: i32,
    pub nombre_usuario: String,
}
