use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::cita::EstadoCita;

/// Bloque de cliente de una cita: unión etiquetada en lugar de campos
/// anulables. Para un cliente registrado el contacto se resuelve contra
/// la tabla clientes y cualquier contacto enviado aquí se ignora.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum ClienteCita {
    Registrado {
        cliente_id: i32,
    },
    NoRegistrado {
        nombre: String,
        correo: Option<String>,
        telefono: Option<String>,
    },
}

/// Descriptores del vehículo tomados al crear la cita
#[derive(Debug, Clone, Deserialize)]
pub struct VehiculoCita {
    pub marca: String,
    pub modelo: String,
    pub placa: Option<String>,
}

// Request para agendar una cita; el estado inicial siempre es Pendiente
#[derive(Debug, Deserialize)]
pub struct CrearCitaRequest {
    pub cliente: ClienteCita,
    pub vehiculo: VehiculoCita,
    pub servicio_id: i32,
    pub empleado_id: i32,
    pub fecha: NaiveDate,
    pub hora: String,
    pub descripcion: Option<String>,
}

// Request para reprogramar/editar una cita. El snapshot de cliente y
// vehículo no es editable: es un registro histórico. Si viene estado,
// pasa por la misma tabla de transiciones que el endpoint de estado.
#[derive(Debug, Deserialize)]
pub struct ActualizarCitaRequest {
    pub servicio_id: Option<i32>,
    pub empleado_id: Option<i32>,
    pub fecha: Option<NaiveDate>,
    pub hora: Option<String>,
    pub descripcion: Option<String>,
    pub estado: Option<String>,
}

// Request del endpoint de solo-estado
#[derive(Debug, Deserialize)]
pub struct CambiarEstadoRequest {
    pub estado: String,
}

/// Entrada de la tabla de transiciones que consume el frontend
#[derive(Debug, serde::Serialize)]
pub struct TransicionesEstado {
    pub estado: EstadoCita,
    pub siguientes: &'static [EstadoCita],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cliente_registrado_deserializa() {
        let json = r#"{ "tipo": "registrado", "cliente_id": 7 }"#;
        let cliente: ClienteCita = serde_json::from_str(json).unwrap();
        assert!(matches!(cliente, ClienteCita::Registrado { cliente_id: 7 }));
    }

    #[test]
    fn test_cliente_no_registrado_deserializa() {
        let json = r#"{
            "tipo": "no_registrado",
            "nombre": "Ana Torres",
            "correo": "ana@example.com",
            "telefono": "5551234567"
        }"#;
        let cliente: ClienteCita = serde_json::from_str(json).unwrap();
        match cliente {
            ClienteCita::NoRegistrado { nombre, .. } => assert_eq!(nombre, "Ana Torres"),
            otro => panic!("se esperaba no_registrado, llegó {:?}", otro),
        }
    }

    #[test]
    fn test_tipo_desconocido_falla() {
        let json = r#"{ "tipo": "fantasma", "cliente_id": 1 }"#;
        assert!(serde_json::from_str::<ClienteCita>(json).is_err());
    }
}
