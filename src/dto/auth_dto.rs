use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::auth::UsuarioActual;

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub nombre_usuario: String,
    pub password: String,
}

// Response de login con el token emitido
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UsuarioActual,
    pub expires_at: DateTime<Utc>,
}

// Registro de un usuario nuevo
#[derive(Debug, Deserialize, Validate)]
pub struct RegistroRequest {
    #[validate(length(min = 3, max = 50))]
    pub nombre_usuario: String,

    #[validate(email)]
    pub correo: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

// Usuario sin el hash
#[derive(Debug, Serialize)]
pub struct UsuarioResponse {
    pub id: i32,
    pub nombre_usuario: String,
    pub correo: String,
}
