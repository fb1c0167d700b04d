//! Armado del árbol de historial
//!
//! Convierte las filas planas del JOIN en la estructura anidada
//! Cliente → Vehículo → Servicio que consume el frontend, sin viajes
//! extra a la base.
//!
//! La clave de agrupación depende del discriminador: un cliente
//! registrado agrupa por su cliente_id; un cliente de mostrador no tiene
//! identidad estable entre registros, así que cada fila es su propio
//! nodo. Dentro de un cliente, los vehículos registrados agrupan por
//! vehiculo_id y los de mostrador por marca+modelo+año.

use crate::models::cita::TipoCliente;
use crate::models::historial::{
    ClienteHistorial, HistorialRow, ServicioHistorial, VehiculoHistorial,
};

#[derive(Debug, PartialEq)]
enum ClaveCliente {
    Registrado(i32),
    Fila(i32),
}

#[derive(Debug, PartialEq)]
enum ClaveVehiculo {
    Registrado(i32),
    Descriptor(String),
}

pub fn construir_arbol(filas: Vec<HistorialRow>) -> Vec<ClienteHistorial> {
    let mut clientes: Vec<(ClaveCliente, ClienteHistorial)> = Vec::new();

    for fila in filas {
        let tipo = TipoCliente::parse(&fila.tipo_cliente).unwrap_or(TipoCliente::NoRegistrado);

        let clave_cliente = match tipo {
            TipoCliente::Registrado => match fila.cliente_id {
                Some(cliente_id) => ClaveCliente::Registrado(cliente_id),
                None => ClaveCliente::Fila(fila.id),
            },
            TipoCliente::NoRegistrado => ClaveCliente::Fila(fila.id),
        };

        // Búsqueda lineal: la cardinalidad esperada es pequeña
        let posicion = match clientes.iter().position(|(clave, _)| *clave == clave_cliente) {
            Some(i) => i,
            None => {
                let nodo = nodo_cliente(&fila, tipo, &clave_cliente);
                clientes.push((clave_cliente, nodo));
                clientes.len() - 1
            }
        };
        let cliente = &mut clientes[posicion].1;

        let clave_vehiculo = match tipo {
            TipoCliente::Registrado => match fila.vehiculo_id {
                Some(vehiculo_id) => ClaveVehiculo::Registrado(vehiculo_id),
                None => ClaveVehiculo::Descriptor(descriptor_vehiculo(&fila)),
            },
            TipoCliente::NoRegistrado => ClaveVehiculo::Descriptor(descriptor_vehiculo(&fila)),
        };

        let indice = cliente
            .vehiculos
            .iter()
            .position(|v| clave_de_nodo(v) == clave_vehiculo);

        let vehiculo = match indice {
            Some(i) => &mut cliente.vehiculos[i],
            None => {
                cliente.vehiculos.push(nodo_vehiculo(&fila, tipo));
                let ultimo = cliente.vehiculos.len() - 1;
                &mut cliente.vehiculos[ultimo]
            }
        };

        vehiculo.servicios.push(ServicioHistorial {
            id: fila.id,
            nombre: fila.nombre_servicio,
            descripcion: fila.descripcion,
            fecha: fila.fecha,
            pdf_path: fila.pdf_path,
        });
    }

    clientes.into_iter().map(|(_, nodo)| nodo).collect()
}

/// Selección de campos según el discriminador: los nodos registrados leen
/// los datos vivos del JOIN, los de mostrador los campos en línea.
fn nodo_cliente(fila: &HistorialRow, tipo: TipoCliente, clave: &ClaveCliente) -> ClienteHistorial {
    let id = match clave {
        ClaveCliente::Registrado(cliente_id) => *cliente_id,
        ClaveCliente::Fila(fila_id) => *fila_id,
    };

    let (nombre, telefono) = match tipo {
        TipoCliente::Registrado => {
            let nombre = match (&fila.cliente_nombre, &fila.cliente_apellido) {
                (Some(nombre), Some(apellido)) => format!("{} {}", nombre, apellido),
                (Some(nombre), None) => nombre.clone(),
                _ => String::new(),
            };
            (nombre, fila.cliente_celular.clone())
        }
        TipoCliente::NoRegistrado => (
            fila.nombre_cliente.clone().unwrap_or_default(),
            fila.telefono_cliente.clone(),
        ),
    };

    ClienteHistorial {
        id,
        tipo_cliente: tipo.as_str().to_string(),
        nombre,
        telefono,
        vehiculos: Vec::new(),
    }
}

fn nodo_vehiculo(fila: &HistorialRow, tipo: TipoCliente) -> VehiculoHistorial {
    match tipo {
        TipoCliente::Registrado => VehiculoHistorial {
            vehiculo_id: fila.vehiculo_id,
            marca: fila.veh_marca.clone().unwrap_or_default(),
            modelo: fila.veh_modelo.clone().unwrap_or_default(),
            anio: fila.veh_anio,
            placa: fila.veh_placa.clone(),
            servicios: Vec::new(),
        },
        TipoCliente::NoRegistrado => VehiculoHistorial {
            vehiculo_id: None,
            marca: fila.marca_vehiculo.clone().unwrap_or_default(),
            modelo: fila.modelo_vehiculo.clone().unwrap_or_default(),
            anio: fila.anio_vehiculo,
            placa: None,
            servicios: Vec::new(),
        },
    }
}

fn clave_de_nodo(vehiculo: &VehiculoHistorial) -> ClaveVehiculo {
    match vehiculo.vehiculo_id {
        Some(id) => ClaveVehiculo::Registrado(id),
        None => ClaveVehiculo::Descriptor(format!(
            "{}|{}|{}",
            vehiculo.marca,
            vehiculo.modelo,
            vehiculo.anio.map(|a| a.to_string()).unwrap_or_default()
        )),
    }
}

fn descriptor_vehiculo(fila: &HistorialRow) -> String {
    let (marca, modelo, anio) = if fila.vehiculo_id.is_some() {
        (&fila.veh_marca, &fila.veh_modelo, fila.veh_anio)
    } else {
        (&fila.marca_vehiculo, &fila.modelo_vehiculo, fila.anio_vehiculo)
    };

    format!(
        "{}|{}|{}",
        marca.clone().unwrap_or_default(),
        modelo.clone().unwrap_or_default(),
        anio.map(|a| a.to_string()).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fila_registrada(id: i32, cliente_id: i32, vehiculo_id: i32) -> HistorialRow {
        HistorialRow {
            id,
            tipo_cliente: "registrado".to_string(),
            cliente_id: Some(cliente_id),
            vehiculo_id: Some(vehiculo_id),
            nombre_cliente: None,
            telefono_cliente: None,
            marca_vehiculo: None,
            modelo_vehiculo: None,
            anio_vehiculo: None,
            nombre_servicio: format!("Servicio {}", id),
            descripcion: None,
            fecha: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            pdf_path: format!("uploads/{}.pdf", id),
            cliente_nombre: Some("Laura".to_string()),
            cliente_apellido: Some("Medina".to_string()),
            cliente_celular: Some("5559876543".to_string()),
            veh_marca: Some("Nissan".to_string()),
            veh_modelo: Some("Versa".to_string()),
            veh_anio: Some(2020),
            veh_placa: Some("XYZ9876".to_string()),
        }
    }

    fn fila_mostrador(id: i32) -> HistorialRow {
        HistorialRow {
            id,
            tipo_cliente: "no_registrado".to_string(),
            cliente_id: None,
            vehiculo_id: None,
            nombre_cliente: Some("Pedro Gómez".to_string()),
            telefono_cliente: Some("5551112222".to_string()),
            marca_vehiculo: Some("Ford".to_string()),
            modelo_vehiculo: Some("Fiesta".to_string()),
            anio_vehiculo: Some(2015),
            nombre_servicio: format!("Servicio {}", id),
            descripcion: None,
            fecha: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            pdf_path: format!("uploads/{}.pdf", id),
            cliente_nombre: None,
            cliente_apellido: None,
            cliente_celular: None,
            veh_marca: None,
            veh_modelo: None,
            veh_anio: None,
            veh_placa: None,
        }
    }

    #[test]
    fn test_cliente_registrado_agrupa_por_id() {
        // 3 filas del mismo cliente repartidas en 2 vehículos
        let filas = vec![
            fila_registrada(1, 10, 100),
            fila_registrada(2, 10, 100),
            fila_registrada(3, 10, 200),
        ];

        let arbol = construir_arbol(filas);

        assert_eq!(arbol.len(), 1);
        let cliente = &arbol[0];
        assert_eq!(cliente.id, 10);
        assert_eq!(cliente.nombre, "Laura Medina");
        assert_eq!(cliente.vehiculos.len(), 2);

        let v100 = cliente
            .vehiculos
            .iter()
            .find(|v| v.vehiculo_id == Some(100))
            .unwrap();
        assert_eq!(v100.servicios.len(), 2);

        let v200 = cliente
            .vehiculos
            .iter()
            .find(|v| v.vehiculo_id == Some(200))
            .unwrap();
        assert_eq!(v200.servicios.len(), 1);
    }

    #[test]
    fn test_mostrador_un_nodo_por_fila() {
        // Mismos descriptores de vehículo pero ids de fila distintos:
        // sin identidad estable, cada visita es su propio nodo.
        let filas = vec![fila_mostrador(7), fila_mostrador(8)];

        let arbol = construir_arbol(filas);

        assert_eq!(arbol.len(), 2);
        assert_eq!(arbol[0].id, 7);
        assert_eq!(arbol[1].id, 8);
        for cliente in &arbol {
            assert_eq!(cliente.nombre, "Pedro Gómez");
            assert_eq!(cliente.vehiculos.len(), 1);
            assert_eq!(cliente.vehiculos[0].servicios.len(), 1);
        }
    }

    #[test]
    fn test_campos_de_mostrador_vienen_de_la_fila() {
        let arbol = construir_arbol(vec![fila_mostrador(5)]);

        let vehiculo = &arbol[0].vehiculos[0];
        assert_eq!(vehiculo.vehiculo_id, None);
        assert_eq!(vehiculo.marca, "Ford");
        assert_eq!(vehiculo.modelo, "Fiesta");
        assert_eq!(vehiculo.anio, Some(2015));
    }

    #[test]
    fn test_registrado_y_mostrador_no_se_mezclan() {
        let filas = vec![fila_registrada(1, 10, 100), fila_mostrador(2)];

        let arbol = construir_arbol(filas);

        assert_eq!(arbol.len(), 2);
        assert_eq!(arbol[0].tipo_cliente, "registrado");
        assert_eq!(arbol[1].tipo_cliente, "no_registrado");
    }

    #[test]
    fn test_orden_de_servicios_se_preserva() {
        let filas = vec![
            fila_registrada(1, 10, 100),
            fila_registrada(2, 10, 100),
            fila_registrada(3, 10, 100),
        ];

        let arbol = construir_arbol(filas);

        let servicios = &arbol[0].vehiculos[0].servicios;
        let ids: Vec<i32> = servicios.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_vacio() {
        assert!(construir_arbol(Vec::new()).is_empty());
    }
}
