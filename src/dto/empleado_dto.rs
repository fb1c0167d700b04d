use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// Request para dar de alta un empleado con sus especialidades.
// La lista de especialidades no puede venir vacía; el controlador lo
// rechaza antes de escribir fila alguna.
#[derive(Debug, Deserialize, Validate)]
pub struct CrearEmpleadoRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,

    #[validate(length(min = 1, max = 100))]
    pub apellido: String,

    pub fecha_nacimiento: Option<NaiveDate>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 20))]
    pub celular: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,

    #[validate(length(max = 150))]
    pub contacto_emergencia: Option<String>,

    #[validate(length(max = 20))]
    pub telefono_emergencia: Option<String>,

    pub especialidades: Vec<i32>,
}

// Request para actualizar un empleado; si viene especialidades se
// reemplaza la lista completa dentro de la misma transacción.
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarEmpleadoRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub apellido: Option<String>,

    pub fecha_nacimiento: Option<NaiveDate>,

    #[validate(email)]
    pub correo: Option<String>,

    #[validate(length(max = 20))]
    pub celular: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,

    #[validate(length(max = 150))]
    pub contacto_emergencia: Option<String>,

    #[validate(length(max = 20))]
    pub telefono_emergencia: Option<String>,

    pub especialidades: Option<Vec<i32>>,
}
