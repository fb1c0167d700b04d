use crate::dto::vehiculo_dto::{ActualizarVehiculoRequest, CrearVehiculoRequest};
use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn crear(&self, req: &CrearVehiculoRequest) -> Result<Vehiculo, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            INSERT INTO vehiculos (cliente_id, marca, modelo, placa, vin, anio, kilometraje)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(req.cliente_id)
        .bind(&req.marca)
        .bind(&req.modelo)
        .bind(&req.placa)
        .bind(&req.vin)
        .bind(req.anio)
        .bind(req.kilometraje)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehiculo>, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehiculo)
    }

    pub async fn listar(&self) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos =
            sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehiculos)
    }

    pub async fn listar_por_cliente(&self, cliente_id: i32) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos = sqlx::query_as::<_, Vehiculo>(
            "SELECT * FROM vehiculos WHERE cliente_id = $1 ORDER BY created_at DESC",
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehiculos)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarVehiculoRequest,
    ) -> Result<Vehiculo, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El vehículo", id))?;

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            UPDATE vehiculos
            SET marca = $2, modelo = $3, placa = $4, vin = $5, anio = $6, kilometraje = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.marca.as_ref().unwrap_or(&actual.marca))
        .bind(req.modelo.as_ref().unwrap_or(&actual.modelo))
        .bind(req.placa.as_ref().unwrap_or(&actual.placa))
        .bind(req.vin.as_ref().unwrap_or(&actual.vin))
        .bind(req.anio.unwrap_or(actual.anio))
        .bind(req.kilometraje.unwrap_or(actual.kilometraje))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
