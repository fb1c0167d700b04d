use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegistroRequest, UsuarioResponse};
use crate::dto::respuesta::ApiResponse;
use crate::services::auth_service::AuthService;
use crate::utils::errors::{required_field_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            service: AuthService::new(pool, config),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if request.nombre_usuario.trim().is_empty() {
            return Err(required_field_error("nombre_usuario"));
        }
        if request.password.is_empty() {
            return Err(required_field_error("password"));
        }

        self.service.login(&request).await
    }

    pub async fn registrar(
        &self,
        request: RegistroRequest,
    ) -> Result<ApiResponse<UsuarioResponse>, AppError> {
        request.validate()?;

        let usuario = self.service.registrar(&request).await?;

        Ok(ApiResponse::success_with_message(
            usuario,
            "Usuario registrado exitosamente".to_string(),
        ))
    }
}
