use crate::dto::catalogo_dto::CrearMovimientoRequest;
use crate::models::catalogo::Movimiento;
use crate::utils::errors::AppError;
use sqlx::PgPool;

/// Ingresos y egresos comparten forma; el tipo decide la tabla.
#[derive(Debug, Clone, Copy)]
pub enum TipoMovimiento {
    Ingreso,
    Egreso,
}

impl TipoMovimiento {
    fn tabla(&self) -> &'static str {
        match self {
            TipoMovimiento::Ingreso => "ingresos",
            TipoMovimiento::Egreso => "egresos",
        }
    }
}

pub struct FinanzasRepository {
    pool: PgPool,
}

impl FinanzasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn crear(
        &self,
        tipo: TipoMovimiento,
        req: &CrearMovimientoRequest,
    ) -> Result<Movimiento, AppError> {
        let consulta = format!(
            "INSERT INTO {} (concepto, monto, fecha, descripcion) VALUES ($1, $2, $3, $4) RETURNING *",
            tipo.tabla()
        );

        let movimiento = sqlx::query_as::<_, Movimiento>(&consulta)
            .bind(&req.concepto)
            .bind(req.monto)
            .bind(req.fecha)
            .bind(&req.descripcion)
            .fetch_one(&self.pool)
            .await?;

        Ok(movimiento)
    }

    pub async fn listar(&self, tipo: TipoMovimiento) -> Result<Vec<Movimiento>, AppError> {
        let consulta = format!("SELECT * FROM {} ORDER BY fecha DESC, id DESC", tipo.tabla());

        let movimientos = sqlx::query_as::<_, Movimiento>(&consulta)
            .fetch_all(&self.pool)
            .await?;

        Ok(movimientos)
    }

    pub async fn eliminar(&self, tipo: TipoMovimiento, id: i32) -> Result<bool, AppError> {
        let consulta = format!("DELETE FROM {} WHERE id = $1", tipo.tabla());

        let resultado = sqlx::query(&consulta)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
