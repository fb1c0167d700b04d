use crate::dto::cliente_dto::{ActualizarClienteRequest, CrearClienteRequest, VehiculoCompleto};
use crate::models::cliente::Cliente;
use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta de cliente con su vehículo opcional, en una sola transacción.
    /// El vehículo referencia el id recién generado del cliente.
    pub async fn crear(
        &self,
        req: &CrearClienteRequest,
        vehiculo: Option<&VehiculoCompleto>,
    ) -> Result<(Cliente, Option<Vehiculo>), AppError> {
        let mut tx = self.pool.begin().await?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nombre, apellido, fecha_nacimiento, calle, colonia, ciudad, correo, celular, telefono_casa)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.apellido)
        .bind(req.fecha_nacimiento)
        .bind(&req.calle)
        .bind(&req.colonia)
        .bind(&req.ciudad)
        .bind(&req.correo)
        .bind(&req.celular)
        .bind(&req.telefono_casa)
        .fetch_one(&mut *tx)
        .await?;

        let vehiculo_creado = match vehiculo {
            Some(v) => Some(
                sqlx::query_as::<_, Vehiculo>(
                    r#"
                    INSERT INTO vehiculos (cliente_id, marca, modelo, placa, vin, anio, kilometraje)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING *
                    "#,
                )
                .bind(cliente.id)
                .bind(&v.marca)
                .bind(&v.modelo)
                .bind(&v.placa)
                .bind(&v.vin)
                .bind(v.anio)
                .bind(v.kilometraje)
                .fetch_one(&mut *tx)
                .await?,
            ),
            None => None,
        };

        tx.commit().await?;

        Ok((cliente, vehiculo_creado))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes ORDER BY apellido ASC, nombre ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarClienteRequest,
    ) -> Result<Cliente, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("El cliente", id))?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nombre = $2, apellido = $3, fecha_nacimiento = $4, calle = $5,
                colonia = $6, ciudad = $7, correo = $8, celular = $9, telefono_casa = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_ref().unwrap_or(&actual.nombre))
        .bind(req.apellido.as_ref().unwrap_or(&actual.apellido))
        .bind(req.fecha_nacimiento.or(actual.fecha_nacimiento))
        .bind(req.calle.as_ref().or(actual.calle.as_ref()))
        .bind(req.colonia.as_ref().or(actual.colonia.as_ref()))
        .bind(req.ciudad.as_ref().or(actual.ciudad.as_ref()))
        .bind(req.correo.as_ref().or(actual.correo.as_ref()))
        .bind(req.celular.as_ref().or(actual.celular.as_ref()))
        .bind(req.telefono_casa.as_ref().or(actual.telefono_casa.as_ref()))
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    /// Baja de cliente: primero sus vehículos, luego la fila del cliente,
    /// todo en una transacción. Devuelve si realmente se eliminó una fila.
    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vehiculos WHERE cliente_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let resultado = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(resultado.rows_affected() > 0)
    }
}
