use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegistroRequest, UsuarioResponse};
use crate::models::auth::UsuarioActual;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;

/// Servicio de autenticación: verifica credenciales contra la tabla
/// usuarios y emite el token que valida el middleware.
pub struct AuthService {
    repository: UsuarioRepository,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
            jwt_service: JwtService::new(&config.jwt_secret, config.jwt_expiration_hours),
        }
    }

    /// Autentica al usuario y emite un token de acceso
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        let usuario = self
            .repository
            .find_by_nombre_usuario(&req.nombre_usuario)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valido = verify(&req.password, &usuario.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valido {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let actual = UsuarioActual {
            id: usuario.id,
            nombre_usuario: usuario.nombre_usuario,
        };

        let token = self.jwt_service.generar_token(&actual)?;
        let expires_at = Utc::now() + self.jwt_service.expiration();

        log::info!("Login exitoso para '{}'", actual.nombre_usuario);

        Ok(LoginResponse {
            token,
            usuario: actual,
            expires_at,
        })
    }

    /// Registra un usuario nuevo con la contraseña hasheada
    pub async fn registrar(&self, req: &RegistroRequest) -> Result<UsuarioResponse, AppError> {
        if self.repository.nombre_usuario_existe(&req.nombre_usuario).await? {
            return Err(AppError::Conflict(format!(
                "El nombre de usuario '{}' ya está registrado",
                req.nombre_usuario
            )));
        }

        let password_hash =
            hash(&req.password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;

        let usuario = self
            .repository
            .crear(&req.nombre_usuario, &req.correo, &password_hash)
            .await?;

        Ok(UsuarioResponse {
            id: usuario.id,
            nombre_usuario: usuario.nombre_usuario,
            correo: usuario.correo,
        })
    }
}
