use crate::dto::catalogo_dto::ActualizarEmpresaRequest;
use crate::models::catalogo::Empresa;
use crate::utils::errors::AppError;
use sqlx::PgPool;

/// El perfil de la empresa vive en una fila única con id fijo.
const EMPRESA_ID: i32 = 1;

pub struct EmpresaRepository {
    pool: PgPool,
}

impl EmpresaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn obtener(&self) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>("SELECT * FROM empresa WHERE id = $1")
            .bind(EMPRESA_ID)
            .fetch_optional(&self.pool)
            .await?;

        Ok(empresa)
    }

    pub async fn guardar(&self, req: &ActualizarEmpresaRequest) -> Result<Empresa, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            r#"
            INSERT INTO empresa (id, nombre, direccion, telefono, correo, rfc, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now())
            ON CONFLICT (id) DO UPDATE
            SET nombre = EXCLUDED.nombre, direccion = EXCLUDED.direccion,
                telefono = EXCLUDED.telefono, correo = EXCLUDED.correo,
                rfc = EXCLUDED.rfc, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(EMPRESA_ID)
        .bind(&req.nombre)
        .bind(&req.direccion)
        .bind(&req.telefono)
        .bind(&req.correo)
        .bind(&req.rfc)
        .fetch_one(&self.pool)
        .await?;

        Ok(empresa)
    }
}
