//! Tests de integración contra una base PostgreSQL real
//!
//! Requieren DATABASE_URL apuntando a una base con schema.sql cargado.
//! Están marcados con #[ignore]; se corren con `cargo test -- --ignored`.

use autocheckmaster::dto::cita_dto::{ClienteCita, CrearCitaRequest, VehiculoCita};
use autocheckmaster::dto::cliente_dto::{CrearClienteRequest, VehiculoInline};
use autocheckmaster::models::cita::EstadoCita;
use autocheckmaster::repositories::cita_repository::CitaRepository;
use autocheckmaster::repositories::cliente_repository::ClienteRepository;
use autocheckmaster::repositories::empleado_repository::EmpleadoRepository;
use autocheckmaster::repositories::orden_repository::OrdenRepository;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL debe apuntar a una base de prueba");

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("conexión a la base de prueba")
}

fn request_cliente(vehiculo: Option<VehiculoInline>) -> CrearClienteRequest {
    CrearClienteRequest {
        nombre: "Marta".to_string(),
        apellido: "Salas".to_string(),
        fecha_nacimiento: None,
        calle: None,
        colonia: None,
        ciudad: None,
        correo: Some("marta@example.com".to_string()),
        celular: Some("5553334444".to_string()),
        telefono_casa: None,
        vehiculo,
    }
}

fn vehiculo_completo() -> VehiculoInline {
    VehiculoInline {
        marca: Some("Mazda".to_string()),
        modelo: Some("3".to_string()),
        placa: Some("MZD3001".to_string()),
        vin: Some("3MZBN1V38JM000001".to_string()),
        anio: Some(2018),
        kilometraje: Some(60000),
    }
}

async fn fixture_servicio(pool: &PgPool) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO servicios (nombre, descripcion, precio) VALUES ('Afinación', NULL, 1500) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn fixture_empleado(pool: &PgPool) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO empleados (nombre, apellido) VALUES ('Jorge', 'Luna') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con schema.sql cargado"]
async fn test_cliente_con_vehiculo_completo() {
    let pool = pool().await;
    let repo = ClienteRepository::new(pool.clone());

    let req = request_cliente(Some(vehiculo_completo()));
    let completo = req.vehiculo.as_ref().unwrap().completo();

    let (cliente, vehiculo) = repo.crear(&req, completo.as_ref()).await.unwrap();

    let vehiculo = vehiculo.expect("el bloque completo debe producir un vehículo");
    assert_eq!(vehiculo.cliente_id, cliente.id);

    let cuenta: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM vehiculos WHERE cliente_id = $1")
            .bind(cliente.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(cuenta, 1);

    repo.eliminar(cliente.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con schema.sql cargado"]
async fn test_cliente_con_vehiculo_parcial_no_inserta_vehiculo() {
    let pool = pool().await;
    let repo = ClienteRepository::new(pool.clone());

    let mut bloque = vehiculo_completo();
    bloque.vin = None;

    let req = request_cliente(Some(bloque));
    let completo = req.vehiculo.as_ref().unwrap().completo();
    assert!(completo.is_none());

    let (cliente, vehiculo) = repo.crear(&req, completo.as_ref()).await.unwrap();
    assert!(vehiculo.is_none());

    let cuenta: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM vehiculos WHERE cliente_id = $1")
            .bind(cliente.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(cuenta, 0);

    repo.eliminar(cliente.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con schema.sql cargado"]
async fn test_eliminar_cliente_arrastra_vehiculos() {
    let pool = pool().await;
    let repo = ClienteRepository::new(pool.clone());

    let req = request_cliente(Some(vehiculo_completo()));
    let completo = req.vehiculo.as_ref().unwrap().completo();
    let (cliente, vehiculo) = repo.crear(&req, completo.as_ref()).await.unwrap();
    let vehiculo_id = vehiculo.unwrap().id;

    assert!(repo.eliminar(cliente.id).await.unwrap());

    let quedan_vehiculos: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM vehiculos WHERE id = $1")
            .bind(vehiculo_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(quedan_vehiculos, 0);

    let quedan_clientes: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM clientes WHERE id = $1")
            .bind(cliente.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(quedan_clientes, 0);

    // Segunda baja: ya no hay fila que borrar
    assert!(!repo.eliminar(cliente.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con schema.sql cargado"]
async fn test_alta_de_empleado_con_especialidad_inexistente_se_revierte() {
    let pool = pool().await;
    let repo = EmpleadoRepository::new(pool.clone());

    let antes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM empleados")
        .fetch_one(&pool)
        .await
        .unwrap();

    let req = autocheckmaster::dto::empleado_dto::CrearEmpleadoRequest {
        nombre: "Hugo".to_string(),
        apellido: "Prieto".to_string(),
        fecha_nacimiento: None,
        correo: None,
        celular: None,
        direccion: None,
        contacto_emergencia: None,
        telefono_emergencia: None,
        especialidades: vec![999_999],
    };

    assert!(repo.crear(&req).await.is_err());

    // La llave foránea inválida revierte también la fila del empleado
    let despues: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM empleados")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(antes, despues);
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con schema.sql cargado"]
async fn test_recorrido_de_estados_de_una_cita() {
    let pool = pool().await;
    let citas = CitaRepository::new(pool.clone());

    let servicio_id = fixture_servicio(&pool).await;
    let empleado_id = fixture_empleado(&pool).await;

    let req = CrearCitaRequest {
        cliente: ClienteCita::NoRegistrado {
            nombre: "Raúl Vega".to_string(),
            correo: Some("raul@example.com".to_string()),
            telefono: Some("5550001111".to_string()),
        },
        vehiculo: VehiculoCita {
            marca: "Chevrolet".to_string(),
            modelo: "Aveo".to_string(),
            placa: None,
        },
        servicio_id,
        empleado_id,
        fecha: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        hora: "09:00".to_string(),
        descripcion: None,
    };

    let hora = chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let cita = citas.crear(&req, hora).await.unwrap();
    assert_eq!(cita.estado, "Pendiente");

    // Pendiente → Completada es ilegal y el error nombra ambos estados
    let error = citas
        .cambiar_estado(cita.id, EstadoCita::Completada)
        .await
        .unwrap_err();
    let mensaje = error.to_string();
    assert!(mensaje.contains("Pendiente"));
    assert!(mensaje.contains("Completada"));

    let cita = citas
        .cambiar_estado(cita.id, EstadoCita::Confirmada)
        .await
        .unwrap();
    assert_eq!(cita.estado, "Confirmada");

    let cita = citas
        .cambiar_estado(cita.id, EstadoCita::Completada)
        .await
        .unwrap();
    assert_eq!(cita.estado, "Completada");

    // Estado terminal: no hay regreso
    assert!(citas
        .cambiar_estado(cita.id, EstadoCita::Confirmada)
        .await
        .is_err());

    citas.eliminar(cita.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con schema.sql cargado"]
async fn test_total_de_orden_se_fija_una_sola_vez() {
    let pool = pool().await;
    let ordenes = OrdenRepository::new(pool.clone());

    let servicio_id = fixture_servicio(&pool).await;
    let empleado_id = fixture_empleado(&pool).await;

    let req = autocheckmaster::dto::orden_dto::CrearOrdenRequest {
        cliente: ClienteCita::NoRegistrado {
            nombre: "Elena Ruiz".to_string(),
            correo: None,
            telefono: Some("5552223333".to_string()),
        },
        vehiculo: VehiculoCita {
            marca: "Honda".to_string(),
            modelo: "Civic".to_string(),
            placa: None,
        },
        servicio_id,
        empleado_id,
        descripcion: None,
        fecha_inicio: None,
    };

    let orden = ordenes
        .crear(&req, NaiveDate::from_ymd_opt(2025, 10, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(orden.total, Decimal::ZERO);

    let orden = ordenes
        .actualizar_total(orden.id, Decimal::new(250000, 2))
        .await
        .unwrap();
    assert_eq!(orden.total, Decimal::new(250000, 2));

    // Segunda escritura: conflicto, sin importar el valor
    assert!(ordenes
        .actualizar_total(orden.id, Decimal::new(100, 0))
        .await
        .is_err());

    ordenes.eliminar(orden.id).await.unwrap();
}
