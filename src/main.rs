use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dealership_backend::config::EnvironmentConfig;
use dealership_backend::database::DatabaseConnection;
use dealership_backend::middleware::{cors_middleware, cors_middleware_with_origins};
use dealership_backend::routes::create_app_router;
use dealership_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Dealership Records - Backend de concesionario");
    info!("================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error aplicando migraciones: {}", e);
        return Err(e.into());
    }
    info!("✅ Migraciones aplicadas");

    let config = EnvironmentConfig::default();
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(db_connection.pool().clone(), config.clone());

    let app = create_app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Página principal de carga de datos");
    info!("   GET  /health - Health check");
    info!("👥 Clientes:");
    info!("   POST /customers - Crear cliente");
    info!("   GET  /customers - Listar clientes");
    info!("   GET  /customers/:id - Obtener cliente");
    info!("🚙 Vehículos:");
    info!("   POST /vehicles - Crear vehículo");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   GET  /vehicles/:id - Obtener vehículo");
    info!("🔧 Servicio:");
    info!("   POST /appointments - Agendar cita de servicio");
    info!("   GET  /appointments - Listar citas");
    info!("   POST /complete_service/:id - Completar servicio");
    info!("   POST /service_packages - Crear paquete de servicio");
    info!("   GET  /service_packages - Listar paquetes");
    info!("💰 Ventas:");
    info!("   POST /sell_car - Registrar venta (formulario)");
    info!("   GET|POST /sales_statistics - Estadísticas de venta");
    info!("🧾 Facturación:");
    info!("   GET  /bill/:vehicle_id - Factura de venta");
    info!("   GET  /service_bill/:appointment_id - Factura de servicio");

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
