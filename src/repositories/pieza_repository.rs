use crate::dto::catalogo_dto::{ActualizarPiezaRequest, CrearPiezaRequest};
use crate::models::catalogo::Pieza;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct PiezaRepository {
    pool: PgPool,
}

impl PiezaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn crear(&self, req: &CrearPiezaRequest) -> Result<Pieza, AppError> {
        let pieza = sqlx::query_as::<_, Pieza>(
            r#"
            INSERT INTO piezas (nombre, descripcion, precio, cantidad)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.descripcion)
        .bind(req.precio)
        .bind(req.cantidad)
        .fetch_one(&self.pool)
        .await?;

        Ok(pieza)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pieza>, AppError> {
        let pieza = sqlx::query_as::<_, Pieza>("SELECT * FROM piezas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pieza)
    }

    pub async fn listar(&self) -> Result<Vec<Pieza>, AppError> {
        let piezas = sqlx::query_as::<_, Pieza>("SELECT * FROM piezas ORDER BY nombre ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(piezas)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarPiezaRequest,
    ) -> Result<Pieza, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La pieza", id))?;

        let pieza = sqlx::query_as::<_, Pieza>(
            r#"
            UPDATE piezas
            SET nombre = $2, descripcion = $3, precio = $4, cantidad = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_ref().unwrap_or(&actual.nombre))
        .bind(req.descripcion.as_ref().or(actual.descripcion.as_ref()))
        .bind(req.precio.unwrap_or(actual.precio))
        .bind(req.cantidad.unwrap_or(actual.cantidad))
        .fetch_one(&self.pool)
        .await?;

        Ok(pieza)
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM piezas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
