use crate::dto::cita_dto::ClienteCita;
use crate::dto::orden_dto::CrearOrdenRequest;
use crate::models::cita::TipoCliente;
use crate::models::cliente::Cliente;
use crate::models::orden::{EstadoOrden, OrdenServicio};
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct OrdenRepository {
    pool: PgPool,
}

impl OrdenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Abre una orden de servicio con los mismos snapshots denormalizados
    /// que una cita. El total arranca en 0 y el estado en Pendiente.
    pub async fn crear(
        &self,
        req: &CrearOrdenRequest,
        fecha_inicio: NaiveDate,
    ) -> Result<OrdenServicio, AppError> {
        let mut tx = self.pool.begin().await?;

        let nombre_servicio =
            sqlx::query_scalar::<_, String>("SELECT nombre FROM servicios WHERE id = $1")
                .bind(req.servicio_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| not_found_error("El servicio", req.servicio_id))?;

        let nombre_empleado = sqlx::query_scalar::<_, String>(
            "SELECT nombre || ' ' || apellido FROM empleados WHERE id = $1",
        )
        .bind(req.empleado_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("El empleado", req.empleado_id))?;

        let (tipo, cliente_id, nombre_cliente, telefono) = match &req.cliente {
            ClienteCita::Registrado { cliente_id } => {
                let cliente =
                    sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
                        .bind(cliente_id)
                        .fetch_optional(&mut *tx)
                        .await?
                        .ok_or_else(|| not_found_error("El cliente", *cliente_id))?;

                (
                    TipoCliente::Registrado,
                    Some(cliente.id),
                    cliente.nombre_completo(),
                    cliente.celular,
                )
            }
            ClienteCita::NoRegistrado {
                nombre, telefono, ..
            } => (
                TipoCliente::NoRegistrado,
                None,
                nombre.clone(),
                telefono.clone(),
            ),
        };

        let orden = sqlx::query_as::<_, OrdenServicio>(
            r#"
            INSERT INTO ordenes_servicio (tipo_cliente, cliente_id, nombre_cliente, telefono_cliente,
                                          marca_vehiculo, modelo_vehiculo, placa_vehiculo,
                                          servicio_id, nombre_servicio, empleado_id, nombre_empleado,
                                          descripcion, total, estado, fecha_inicio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 0, $13, $14)
            RETURNING *
            "#,
        )
        .bind(tipo.as_str())
        .bind(cliente_id)
        .bind(&nombre_cliente)
        .bind(&telefono)
        .bind(&req.vehiculo.marca)
        .bind(&req.vehiculo.modelo)
        .bind(&req.vehiculo.placa)
        .bind(req.servicio_id)
        .bind(&nombre_servicio)
        .bind(req.empleado_id)
        .bind(&nombre_empleado)
        .bind(&req.descripcion)
        .bind(EstadoOrden::Pendiente.as_str())
        .bind(fecha_inicio)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(orden)
    }

    pub async fn listar(&self) -> Result<Vec<OrdenServicio>, AppError> {
        let ordenes = sqlx::query_as::<_, OrdenServicio>(
            "SELECT * FROM ordenes_servicio ORDER BY fecha_inicio DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ordenes)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrdenServicio>, AppError> {
        let orden = sqlx::query_as::<_, OrdenServicio>("SELECT * FROM ordenes_servicio WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(orden)
    }

    /// Fija el total de la orden. Invariante de una sola escritura: el
    /// UPDATE está condicionado a total = 0, así que la segunda petición
    /// (o una carrera) afecta cero filas y se reporta como conflicto con
    /// el total vigente.
    pub async fn actualizar_total(
        &self,
        id: i32,
        total: Decimal,
    ) -> Result<OrdenServicio, AppError> {
        let orden = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La orden", id))?;

        let filas = sqlx::query(
            "UPDATE ordenes_servicio SET total = $1, updated_at = now() WHERE id = $2 AND total = 0",
        )
        .bind(total)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if filas == 0 {
            return Err(AppError::Conflict(format!(
                "El total de la orden solo puede modificarse una vez (total actual: {})",
                orden.total
            )));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La orden", id))
    }

    pub async fn cambiar_estado(
        &self,
        id: i32,
        estado: EstadoOrden,
    ) -> Result<OrdenServicio, AppError> {
        let orden = sqlx::query_as::<_, OrdenServicio>(
            "UPDATE ordenes_servicio SET estado = $1, updated_at = now() WHERE id = $2 RETURNING *",
        )
        .bind(estado.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("La orden", id))?;

        Ok(orden)
    }

    /// Cierra la orden: estado Completada y fecha de término del día.
    pub async fn finalizar(&self, id: i32) -> Result<OrdenServicio, AppError> {
        let orden = sqlx::query_as::<_, OrdenServicio>(
            r#"
            UPDATE ordenes_servicio
            SET estado = $1, fecha_fin = CURRENT_DATE, updated_at = now()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(EstadoOrden::Completada.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("La orden", id))?;

        Ok(orden)
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM ordenes_servicio WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
