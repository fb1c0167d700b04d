use crate::dto::servicio_dto::{ActualizarServicioRequest, CrearServicioRequest};
use crate::models::servicio::Servicio;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ServicioRepository {
    pool: PgPool,
}

impl ServicioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn crear(&self, req: &CrearServicioRequest) -> Result<Servicio, AppError> {
        let servicio = sqlx::query_as::<_, Servicio>(
            r#"
            INSERT INTO servicios (nombre, descripcion, precio)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.descripcion)
        .bind(req.precio)
        .fetch_one(&self.pool)
        .await?;

        Ok(servicio)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Servicio>, AppError> {
        let servicio = sqlx::query_as::<_, Servicio>("SELECT * FROM servicios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(servicio)
    }

    pub async fn listar(&self) -> Result<Vec<Servicio>, AppError> {
        let servicios =
            sqlx::query_as::<_, Servicio>("SELECT * FROM servicios ORDER BY nombre ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(servicios)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarServicioRequest,
    ) -> Result<Servicio, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El servicio", id))?;

        let servicio = sqlx::query_as::<_, Servicio>(
            r#"
            UPDATE servicios
            SET nombre = $2, descripcion = $3, precio = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_ref().unwrap_or(&actual.nombre))
        .bind(req.descripcion.as_ref().or(actual.descripcion.as_ref()))
        .bind(req.precio.unwrap_or(actual.precio))
        .fetch_one(&self.pool)
        .await?;

        Ok(servicio)
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM servicios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
