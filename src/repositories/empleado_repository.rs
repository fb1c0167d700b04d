use crate::dto::empleado_dto::{ActualizarEmpleadoRequest, CrearEmpleadoRequest};
use crate::models::empleado::{Empleado, EmpleadoConEspecialidades, Especialidad};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

const SELECT_CON_ESPECIALIDADES: &str = r#"
    SELECT e.*, string_agg(s.nombre, ', ' ORDER BY s.nombre) AS especialidades
    FROM empleados e
    LEFT JOIN empleados_especialidades es ON es.empleado_id = e.id
    LEFT JOIN especialidades s ON s.id = es.especialidad_id
"#;

pub struct EmpleadoRepository {
    pool: PgPool,
}

impl EmpleadoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta de empleado: fila del empleado más una fila de unión por cada
    /// especialidad, todo en una transacción. Una especialidad inexistente
    /// viola la llave foránea y revierte el alta completa.
    pub async fn crear(
        &self,
        req: &CrearEmpleadoRequest,
    ) -> Result<EmpleadoConEspecialidades, AppError> {
        let mut tx = self.pool.begin().await?;

        let empleado = sqlx::query_as::<_, Empleado>(
            r#"
            INSERT INTO empleados (nombre, apellido, fecha_nacimiento, correo, celular, direccion, contacto_emergencia, telefono_emergencia)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.apellido)
        .bind(req.fecha_nacimiento)
        .bind(&req.correo)
        .bind(&req.celular)
        .bind(&req.direccion)
        .bind(&req.contacto_emergencia)
        .bind(&req.telefono_emergencia)
        .fetch_one(&mut *tx)
        .await?;

        for especialidad_id in &req.especialidades {
            sqlx::query(
                "INSERT INTO empleados_especialidades (empleado_id, especialidad_id) VALUES ($1, $2)",
            )
            .bind(empleado.id)
            .bind(especialidad_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_con_especialidades(empleado.id)
            .await?
            .ok_or_else(|| not_found_error("El empleado", empleado.id))
    }

    pub async fn find_con_especialidades(
        &self,
        id: i32,
    ) -> Result<Option<EmpleadoConEspecialidades>, AppError> {
        let consulta = format!("{} WHERE e.id = $1 GROUP BY e.id", SELECT_CON_ESPECIALIDADES);

        let empleado = sqlx::query_as::<_, EmpleadoConEspecialidades>(&consulta)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(empleado)
    }

    pub async fn listar(&self) -> Result<Vec<EmpleadoConEspecialidades>, AppError> {
        let consulta = format!(
            "{} GROUP BY e.id ORDER BY e.apellido ASC, e.nombre ASC",
            SELECT_CON_ESPECIALIDADES
        );

        let empleados = sqlx::query_as::<_, EmpleadoConEspecialidades>(&consulta)
            .fetch_all(&self.pool)
            .await?;

        Ok(empleados)
    }

    /// Actualiza los datos del empleado; si el request trae especialidades
    /// la lista de unión se reemplaza completa dentro de la transacción.
    pub async fn actualizar(
        &self,
        id: i32,
        req: &ActualizarEmpleadoRequest,
    ) -> Result<EmpleadoConEspecialidades, AppError> {
        let mut tx = self.pool.begin().await?;

        let actual = sqlx::query_as::<_, Empleado>("SELECT * FROM empleados WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("El empleado", id))?;

        sqlx::query(
            r#"
            UPDATE empleados
            SET nombre = $2, apellido = $3, fecha_nacimiento = $4, correo = $5,
                celular = $6, direccion = $7, contacto_emergencia = $8, telefono_emergencia = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_ref().unwrap_or(&actual.nombre))
        .bind(req.apellido.as_ref().unwrap_or(&actual.apellido))
        .bind(req.fecha_nacimiento.or(actual.fecha_nacimiento))
        .bind(req.correo.as_ref().or(actual.correo.as_ref()))
        .bind(req.celular.as_ref().or(actual.celular.as_ref()))
        .bind(req.direccion.as_ref().or(actual.direccion.as_ref()))
        .bind(req.contacto_emergencia.as_ref().or(actual.contacto_emergencia.as_ref()))
        .bind(req.telefono_emergencia.as_ref().or(actual.telefono_emergencia.as_ref()))
        .execute(&mut *tx)
        .await?;

        if let Some(especialidades) = &req.especialidades {
            sqlx::query("DELETE FROM empleados_especialidades WHERE empleado_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for especialidad_id in especialidades {
                sqlx::query(
                    "INSERT INTO empleados_especialidades (empleado_id, especialidad_id) VALUES ($1, $2)",
                )
                .bind(id)
                .bind(especialidad_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        self.find_con_especialidades(id)
            .await?
            .ok_or_else(|| not_found_error("El empleado", id))
    }

    /// Baja de empleado: primero las filas de unión, luego la fila del
    /// empleado, en una transacción.
    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM empleados_especialidades WHERE empleado_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let resultado = sqlx::query("DELETE FROM empleados WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(resultado.rows_affected() > 0)
    }

    pub async fn listar_especialidades(&self) -> Result<Vec<Especialidad>, AppError> {
        let especialidades = sqlx::query_as::<_, Especialidad>(
            "SELECT id, nombre FROM especialidades ORDER BY nombre ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(especialidades)
    }
}
