use crate::dto::cita_dto::{ActualizarCitaRequest, ClienteCita, CrearCitaRequest};
use crate::models::cita::{Cita, CitaListado, EstadoCita, TipoCliente};
use crate::models::cliente::Cliente;
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveTime;
use sqlx::{PgPool, Postgres, Transaction};

pub struct CitaRepository {
    pool: PgPool,
}

impl CitaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Valida una transición contra la tabla de EstadoCita. Único punto de
    /// decisión: lo usan tanto el endpoint de solo-estado como la
    /// actualización completa.
    pub fn validar_transicion(actual: EstadoCita, destino: EstadoCita) -> Result<(), AppError> {
        if actual.puede_transicionar(destino) {
            Ok(())
        } else {
            Err(AppError::Conflict(format!(
                "Transición de estado inválida: \"{}\" → \"{}\"",
                actual, destino
            )))
        }
    }

    /// Agenda una cita. Resuelve dentro de la transacción los nombres
    /// denormalizados de servicio y técnico, y para clientes registrados
    /// toma el contacto autoritativo de la tabla clientes, ignorando el
    /// contacto del request.
    pub async fn crear(&self, req: &CrearCitaRequest, hora: NaiveTime) -> Result<Cita, AppError> {
        let mut tx = self.pool.begin().await?;

        let nombre_servicio = Self::nombre_servicio(&mut tx, req.servicio_id).await?;
        let nombre_empleado = Self::nombre_empleado(&mut tx, req.empleado_id).await?;

        let (tipo, cliente_id, nombre_cliente, correo, telefono) = match &req.cliente {
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
                    cliente.correo,
                    cliente.celular,
                )
            }
            ClienteCita::NoRegistrado {
                nombre,
                correo,
                telefono,
            } => (
                TipoCliente::NoRegistrado,
                None,
                nombre.clone(),
                correo.clone(),
                telefono.clone(),
            ),
        };

        let cita = sqlx::query_as::<_, Cita>(
            r#"
            INSERT INTO citas (tipo_cliente, cliente_id, nombre_cliente, correo_cliente, telefono_cliente,
                               marca_vehiculo, modelo_vehiculo, placa_vehiculo,
                               servicio_id, nombre_servicio, empleado_id, nombre_empleado,
                               fecha, hora, descripcion, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(tipo.as_str())
        .bind(cliente_id)
        .bind(&nombre_cliente)
        .bind(&correo)
        .bind(&telefono)
        .bind(&req.vehiculo.marca)
        .bind(&req.vehiculo.modelo)
        .bind(&req.vehiculo.placa)
        .bind(req.servicio_id)
        .bind(&nombre_servicio)
        .bind(req.empleado_id)
        .bind(&nombre_empleado)
        .bind(req.fecha)
        .bind(hora)
        .bind(&req.descripcion)
        .bind(EstadoCita::Pendiente.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(cita)
    }

    /// Listado ordenado por fecha y hora ascendente. El contacto se
    /// resuelve contra el cliente vivo cuando la cita tiene uno.
    pub async fn listar(&self) -> Result<Vec<CitaListado>, AppError> {
        let citas = sqlx::query_as::<_, CitaListado>(
            r#"
            SELECT ci.id, ci.tipo_cliente, ci.cliente_id, ci.nombre_cliente,
                   COALESCE(c.correo, ci.correo_cliente) AS correo_contacto,
                   COALESCE(c.celular, ci.telefono_cliente) AS telefono_contacto,
                   ci.marca_vehiculo, ci.modelo_vehiculo, ci.placa_vehiculo,
                   ci.servicio_id, ci.nombre_servicio, ci.empleado_id, ci.nombre_empleado,
                   ci.fecha, ci.hora, ci.descripcion, ci.estado
            FROM citas ci
            LEFT JOIN clientes c ON c.id = ci.cliente_id
            ORDER BY ci.fecha ASC, ci.hora ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(citas)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Cita>, AppError> {
        let cita = sqlx::query_as::<_, Cita>("SELECT * FROM citas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cita)
    }

    /// Cambia solo el estado de la cita. La escritura es un UPDATE
    /// condicionado al estado leído: cero filas afectadas significa que
    /// otra petición ganó la carrera y se reporta como conflicto.
    pub async fn cambiar_estado(&self, id: i32, destino: EstadoCita) -> Result<Cita, AppError> {
        let cita = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La cita", id))?;

        let actual = Self::estado_almacenado(&cita)?;
        Self::validar_transicion(actual, destino)?;

        let filas = sqlx::query(
            "UPDATE citas SET estado = $1, updated_at = now() WHERE id = $2 AND estado = $3",
        )
        .bind(destino.as_str())
        .bind(id)
        .bind(actual.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if filas == 0 {
            return Err(AppError::Conflict(format!(
                "La cita {} dejó de estar en \"{}\" mientras se procesaba la petición",
                id, actual
            )));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("La cita", id))
    }

    /// Actualización completa de la cita (reprogramación). El snapshot de
    /// cliente/vehículo no se toca; si el request trae estado pasa por la
    /// misma tabla de transiciones que cambiar_estado.
    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarCitaRequest,
        hora: Option<NaiveTime>,
    ) -> Result<Cita, AppError> {
        let mut tx = self.pool.begin().await?;

        let cita = sqlx::query_as::<_, Cita>("SELECT * FROM citas WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("La cita", id))?;

        let actual = Self::estado_almacenado(&cita)?;

        let destino = match &req.estado {
            Some(valor) => {
                let destino = EstadoCita::parse(valor).ok_or_else(|| {
                    AppError::BadRequest(format!("Estado desconocido: '{}'", valor))
                })?;
                if destino != actual {
                    Self::validar_transicion(actual, destino)?;
                }
                destino
            }
            None => actual,
        };

        let (servicio_id, nombre_servicio) = match req.servicio_id {
            Some(servicio_id) => {
                let nombre = Self::nombre_servicio(&mut tx, servicio_id).await?;
                (Some(servicio_id), nombre)
            }
            None => (cita.servicio_id, cita.nombre_servicio.clone()),
        };

        let (empleado_id, nombre_empleado) = match req.empleado_id {
            Some(empleado_id) => {
                let nombre = Self::nombre_empleado(&mut tx, empleado_id).await?;
                (Some(empleado_id), nombre)
            }
            None => (cita.empleado_id, cita.nombre_empleado.clone()),
        };

        let filas = sqlx::query(
            r#"
            UPDATE citas
            SET servicio_id = $2, nombre_servicio = $3, empleado_id = $4, nombre_empleado = $5,
                fecha = $6, hora = $7, descripcion = $8, estado = $9, updated_at = now()
            WHERE id = $1 AND estado = $10
            "#,
        )
        .bind(id)
        .bind(servicio_id)
        .bind(&nombre_servicio)
        .bind(empleado_id)
        .bind(&nombre_empleado)
        .bind(req.fecha.unwrap_or(cita.fecha))
        .bind(hora.unwrap_or(cita.hora))
        .bind(req.descripcion.as_ref().or(cita.descripcion.as_ref()))
        .bind(destino.as_str())
        .bind(actual.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if filas == 0 {
            return Err(AppError::Conflict(format!(
                "La cita {} dejó de estar en \"{}\" mientras se procesaba la petición",
                id, actual
            )));
        }

        let actualizada = sqlx::query_as::<_, Cita>("SELECT * FROM citas WHERE id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(actualizada)
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM citas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }

    fn estado_almacenado(cita: &Cita) -> Result<EstadoCita, AppError> {
        EstadoCita::parse(&cita.estado).ok_or_else(|| {
            AppError::Internal(format!(
                "Estado desconocido en la base para la cita {}: '{}'",
                cita.id, cita.estado
            ))
        })
    }

    async fn nombre_servicio(
        tx: &mut Transaction<'_, Postgres>,
        servicio_id: i32,
    ) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT nombre FROM servicios WHERE id = $1")
            .bind(servicio_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| not_found_error("El servicio", servicio_id))
    }

    async fn nombre_empleado(
        tx: &mut Transaction<'_, Postgres>,
        empleado_id: i32,
    ) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>(
            "SELECT nombre || ' ' || apellido FROM empleados WHERE id = $1",
        )
        .bind(empleado_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| not_found_error("El empleado", empleado_id))
    }
}
