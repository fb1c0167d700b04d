use crate::models::auth::{JwtClaims, UsuarioActual};
use crate::utils::errors::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Servicio JWT
pub struct JwtService {
    algorithm: Algorithm,
    expiration: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            expiration: Duration::hours(expiration_hours),
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Genera un token de acceso
    pub fn generar_token(&self, usuario: &UsuarioActual) -> Result<String, AppError> {
        let ahora = Utc::now();
        let expira = ahora + self.expiration;

        let claims = JwtClaims {
            sub: usuario.id,
            nombre_usuario: usuario.nombre_usuario.clone(),
            exp: expira.timestamp(),
            iat: ahora.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validar_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }

    /// Extrae la identidad del portador de un token válido
    pub fn usuario_del_token(&self, token: &str) -> Result<UsuarioActual, AppError> {
        let claims = self.validar_token(token)?;

        Ok(UsuarioActual {
            id: claims.sub,
            nombre_usuario: claims.nombre_usuario,
        })
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servicio() -> JwtService {
        JwtService::new("secreto-de-prueba", 24)
    }

    #[test]
    fn test_generar_y_validar_token() {
        let jwt = servicio();

        let usuario = UsuarioActual {
            id: 42,
            nombre_usuario: "recepcion".to_string(),
        };

        let token = jwt.generar_token(&usuario).unwrap();
        assert!(!token.is_empty());

        let claims = jwt.validar_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.nombre_usuario, "recepcion");
    }

    #[test]
    fn test_token_ajeno_se_rechaza() {
        let jwt = servicio();
        let otro = JwtService::new("otro-secreto", 24);

        let usuario = UsuarioActual {
            id: 1,
            nombre_usuario: "taller".to_string(),
        };

        let token = otro.generar_token(&usuario).unwrap();
        assert!(jwt.validar_token(&token).is_err());
    }

    #[test]
    fn test_basura_se_rechaza() {
        assert!(servicio().validar_token("no-es-un-jwt").is_err());
    }
}
