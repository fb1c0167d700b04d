use crate::dto::historial_dto::{ClienteHistorialDatos, CrearHistorialRequest};
use crate::models::cita::TipoCliente;
use crate::models::historial::{Historial, HistorialRow};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct HistorialRepository {
    pool: PgPool,
}

impl HistorialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta un registro de historial con la forma que dicte el
    /// discriminador: llaves foráneas para clientes registrados, campos en
    /// línea para clientes de mostrador. Las referencias se verifican
    /// dentro de la transacción antes de insertar.
    pub async fn crear(
        &self,
        req: &CrearHistorialRequest,
        pdf_path: &str,
    ) -> Result<Historial, AppError> {
        let mut tx = self.pool.begin().await?;

        let registro = match &req.cliente {
            ClienteHistorialDatos::Registrado {
                cliente_id,
                vehiculo_id,
            } => {
                sqlx::query_scalar::<_, i32>("SELECT id FROM clientes WHERE id = $1")
                    .bind(cliente_id)
                    .fetch_optional(&mut *tx)
                    .await?
                    .ok_or_else(|| not_found_error("El cliente", *cliente_id))?;

                let dueno =
                    sqlx::query_scalar::<_, i32>("SELECT cliente_id FROM vehiculos WHERE id = $1")
                        .bind(vehiculo_id)
                        .fetch_optional(&mut *tx)
                        .await?
                        .ok_or_else(|| not_found_error("El vehículo", *vehiculo_id))?;

                if dueno != *cliente_id {
                    return Err(AppError::BadRequest(format!(
                        "El vehículo {} no pertenece al cliente {}",
                        vehiculo_id, cliente_id
                    )));
                }

                sqlx::query_as::<_, Historial>(
                    r#"
                    INSERT INTO historial (tipo_cliente, cliente_id, vehiculo_id, nombre_servicio, descripcion, fecha, pdf_path)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING *
                    "#,
                )
                .bind(TipoCliente::Registrado.as_str())
                .bind(cliente_id)
                .bind(vehiculo_id)
                .bind(&req.nombre_servicio)
                .bind(&req.descripcion)
                .bind(req.fecha)
                .bind(pdf_path)
                .fetch_one(&mut *tx)
                .await?
            }
            ClienteHistorialDatos::NoRegistrado {
                nombre,
                telefono,
                marca,
                modelo,
                anio,
            } => {
                sqlx::query_as::<_, Historial>(
                    r#"
                    INSERT INTO historial (tipo_cliente, nombre_cliente, telefono_cliente,
                                           marca_vehiculo, modelo_vehiculo, anio_vehiculo,
                                           nombre_servicio, descripcion, fecha, pdf_path)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    RETURNING *
                    "#,
                )
                .bind(TipoCliente::NoRegistrado.as_str())
                .bind(nombre)
                .bind(telefono)
                .bind(marca)
                .bind(modelo)
                .bind(anio)
                .bind(&req.nombre_servicio)
                .bind(&req.descripcion)
                .bind(req.fecha)
                .bind(pdf_path)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;

        Ok(registro)
    }

    /// Filas planas del historial con su LEFT JOIN a clientes y vehiculos.
    /// El armado del árbol Cliente → Vehículo → Servicio es de
    /// historial_service, no de SQL.
    pub async fn listar_filas(&self) -> Result<Vec<HistorialRow>, AppError> {
        let filas = sqlx::query_as::<_, HistorialRow>(
            r#"
            SELECT h.*,
                   c.nombre   AS cliente_nombre,
                   c.apellido AS cliente_apellido,
                   c.celular  AS cliente_celular,
                   v.marca    AS veh_marca,
                   v.modelo   AS veh_modelo,
                   v.anio     AS veh_anio,
                   v.placa    AS veh_placa
            FROM historial h
            LEFT JOIN clientes c ON c.id = h.cliente_id
            LEFT JOIN vehiculos v ON v.id = h.vehiculo_id
            ORDER BY h.fecha ASC, h.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(filas)
    }

    /// Elimina un servicio del historial; devuelve la ruta de su PDF para
    /// que el llamador intente borrar el archivo.
    pub async fn eliminar_servicio(&self, id: i32) -> Result<Option<String>, AppError> {
        let pdf = sqlx::query_scalar::<_, String>(
            "DELETE FROM historial WHERE id = $1 RETURNING pdf_path",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pdf)
    }

    /// Elimina todo el historial de un cliente registrado; devuelve las
    /// rutas de los PDF eliminados.
    pub async fn eliminar_por_cliente(&self, cliente_id: i32) -> Result<Vec<String>, AppError> {
        let pdfs = sqlx::query_scalar::<_, String>(
            "DELETE FROM historial WHERE cliente_id = $1 RETURNING pdf_path",
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pdfs)
    }

    /// Elimina el historial de un vehículo; devuelve las rutas de los PDF.
    pub async fn eliminar_por_vehiculo(&self, vehiculo_id: i32) -> Result<Vec<String>, AppError> {
        let pdfs = sqlx::query_scalar::<_, String>(
            "DELETE FROM historial WHERE vehiculo_id = $1 RETURNING pdf_path",
        )
        .bind(vehiculo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pdfs)
    }
}
