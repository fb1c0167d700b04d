use chrono::NaiveDate;

/// Bloque de cliente de un registro de historial: o referencias a filas
/// existentes, o los datos en línea de un cliente de mostrador.
#[derive(Debug, Clone)]
pub enum ClienteHistorialDatos {
    Registrado {
        cliente_id: i32,
        vehiculo_id: i32,
    },
    NoRegistrado {
        nombre: String,
        telefono: Option<String>,
        marca: String,
        modelo: String,
        anio: Option<i32>,
    },
}

/// Registro de historial ya armado desde los campos del multipart.
/// El PDF viaja aparte: la ruta lo extrae y lo rechaza si falta antes
/// de tocar la base.
#[derive(Debug)]
pub struct CrearHistorialRequest {
    pub cliente: ClienteHistorialDatos,
    pub nombre_servicio: String,
    pub descripcion: Option<String>,
    pub fecha: NaiveDate,
}
