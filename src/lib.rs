//! AutoCheckMaster - backend del taller mecánico
//!
//! API REST sobre PostgreSQL: clientes, vehículos, citas con máquina de
//! estados, órdenes de servicio, empleados, inventario, finanzas e
//! historial de servicios con PDF adjunto.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::json;
use state::AppState;

/// Arma el router completo de la aplicación. Todo lo que cuelga de /api
/// (salvo /api/auth) pasa por el middleware de autenticación.
pub fn build_router(state: AppState) -> Router {
    let protegidas = Router::new()
        .nest("/api/clientes", routes::cliente_routes::create_cliente_router())
        .nest("/api/vehiculos", routes::vehiculo_routes::create_vehiculo_router())
        .nest("/api/empleados", routes::empleado_routes::create_empleado_router())
        .nest("/api/servicios", routes::servicio_routes::create_servicio_router())
        .nest("/api/citas", routes::cita_routes::create_cita_router())
        .nest("/api/ordenes", routes::orden_routes::create_orden_router())
        .nest(
            "/api/historial",
            routes::historial_routes::create_historial_router(&state.config),
        )
        .nest("/api/proveedores", routes::proveedor_routes::create_proveedor_router())
        .nest("/api/piezas", routes::pieza_routes::create_pieza_router())
        .nest("/api/ingresos", routes::finanzas_routes::create_ingreso_router())
        .nest("/api/egresos", routes::finanzas_routes::create_egreso_router())
        .nest("/api/empresa", routes::empresa_routes::create_empresa_router())
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protegidas)
        .layer(middleware::cors::cors_middleware())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "AutoCheckMaster API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
