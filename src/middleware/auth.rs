//! Middleware de autenticación JWT
//!
//! Extrae el token Bearer, lo valida y deja la identidad resuelta en las
//! extensiones del request. Un token ausente o inválido se rechaza con
//! 401 antes de que corra cualquier lógica de la aplicación.

use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Formato de autorización inválido".to_string()))?;

    let jwt_service = JwtService::new(
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    );

    let usuario = jwt_service.usuario_del_token(token)?;

    request.extensions_mut().insert(usuario);

    Ok(next.run(request).await)
}
