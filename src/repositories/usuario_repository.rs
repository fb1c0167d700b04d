use crate::models::auth::Usuario;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn crear(
        &self,
        nombre_usuario: &str,
        correo: &str,
        password_hash: &str,
    ) -> Result<Usuario, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nombre_usuario, correo, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(nombre_usuario)
        .bind(correo)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(usuario)
    }

    pub async fn find_by_nombre_usuario(
        &self,
        nombre_usuario: &str,
    ) -> Result<Option<Usuario>, AppError> {
        let usuario =
            sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE nombre_usuario = $1")
                .bind(nombre_usuario)
                .fetch_optional(&self.pool)
                .await?;

        Ok(usuario)
    }

    pub async fn nombre_usuario_existe(&self, nombre_usuario: &str) -> Result<bool, AppError> {
        let existe: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM usuarios WHERE nombre_usuario = $1)",
        )
        .bind(nombre_usuario)
        .fetch_one(&self.pool)
        .await?;

        Ok(existe.0)
    }
}
