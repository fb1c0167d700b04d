use anyhow::Result;
use autocheckmaster::build_router;
use autocheckmaster::config::environment::EnvironmentConfig;
use autocheckmaster::database::DatabaseConnection;
use autocheckmaster::state::AppState;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 AutoCheckMaster - API del taller");
    info!("===================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app_state = AppState::new(pool, config);
    let app = build_router(app_state);

    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   POST /api/auth/registro - Registrar usuario");
    info!("👤 Clientes:");
    info!("   POST /api/clientes - Registrar cliente (vehículo opcional)");
    info!("   GET  /api/clientes - Listar clientes");
    info!("   GET  /api/clientes/:id - Cliente con sus vehículos");
    info!("   PUT  /api/clientes/:id - Actualizar cliente");
    info!("   DELETE /api/clientes/:id - Eliminar cliente y sus vehículos");
    info!("🚗 Vehículos:");
    info!("   POST /api/vehiculos - Registrar vehículo");
    info!("   GET  /api/vehiculos - Listar vehículos");
    info!("   GET  /api/vehiculos/cliente/:id - Vehículos de un cliente");
    info!("📅 Citas:");
    info!("   POST /api/citas - Agendar cita (estado inicial Pendiente)");
    info!("   GET  /api/citas - Listar citas por fecha y hora");
    info!("   GET  /api/citas/transiciones - Tabla de transiciones de estado");
    info!("   PUT  /api/citas/:id/estado - Cambiar estado");
    info!("🔩 Órdenes de servicio:");
    info!("   POST /api/ordenes - Abrir orden");
    info!("   PUT  /api/ordenes/:id/total - Fijar total (una sola vez)");
    info!("   PUT  /api/ordenes/:id/finalizar - Finalizar orden");
    info!("🧰 Empleados:");
    info!("   POST /api/empleados - Alta con especialidades");
    info!("   GET  /api/empleados/especialidades - Catálogo de especialidades");
    info!("📋 Historial:");
    info!("   POST /api/historial - Registrar servicio (multipart con PDF)");
    info!("   GET  /api/historial - Árbol cliente → vehículo → servicio");
    info!("📦 Catálogos: /api/servicios /api/piezas /api/proveedores");
    info!("💰 Finanzas: /api/ingresos /api/egresos");
    info!("🏢 Empresa: /api/empresa");

    info!("🌐 Servidor iniciando en http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
