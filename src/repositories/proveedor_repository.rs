use crate::dto::catalogo_dto::{ActualizarProveedorRequest, CrearProveedorRequest};
use crate::models::catalogo::Proveedor;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ProveedorRepository {
    pool: PgPool,
}

impl ProveedorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn crear(&self, req: &CrearProveedorRequest) -> Result<Proveedor, AppError> {
        let proveedor = sqlx::query_as::<_, Proveedor>(
            r#"
            INSERT INTO proveedores (nombre, contacto, telefono, correo, direccion)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.contacto)
        .bind(&req.telefono)
        .bind(&req.correo)
        .bind(&req.direccion)
        .fetch_one(&self.pool)
        .await?;

        Ok(proveedor)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Proveedor>, AppError> {
        let proveedor = sqlx::query_as::<_, Proveedor>("SELECT * FROM proveedores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(proveedor)
    }

    pub async fn listar(&self) -> Result<Vec<Proveedor>, AppError> {
        let proveedores =
            sqlx::query_as::<_, Proveedor>("SELECT * FROM proveedores ORDER BY nombre ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(proveedores)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarProveedorRequest,
    ) -> Result<Proveedor, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El proveedor", id))?;

        let proveedor = sqlx::query_as::<_, Proveedor>(
            r#"
            UPDATE proveedores
            SET nombre = $2, contacto = $3, telefono = $4, correo = $5, direccion = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_ref().unwrap_or(&actual.nombre))
        .bind(req.contacto.as_ref().or(actual.contacto.as_ref()))
        .bind(req.telefono.as_ref().or(actual.telefono.as_ref()))
        .bind(req.correo.as_ref().or(actual.correo.as_ref()))
        .bind(req.direccion.as_ref().or(actual.direccion.as_ref()))
        .fetch_one(&self.pool)
        .await?;

        Ok(proveedor)
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM proveedores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
