//! Routers de la aplicación
//!
//! Un archivo por recurso más las páginas server-rendered. El router
//! principal se arma aquí para poder ejercitarlo desde los tests.

pub mod appointment_routes;
pub mod billing_routes;
pub mod customer_routes;
pub mod pages;
pub mod sales_routes;
pub mod service_package_routes;
pub mod vehicle_routes;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health_endpoint))
        .nest("/customers", customer_routes::create_customer_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/appointments", appointment_routes::create_appointment_router())
        .nest(
            "/service_packages",
            service_package_routes::create_service_package_router(),
        )
        .route("/sell_car", post(sales_routes::sell_car))
        .route(
            "/complete_service/:id",
            post(appointment_routes::complete_service),
        )
        .route(
            "/sales_statistics",
            get(sales_routes::sales_statistics_query).post(sales_routes::sales_statistics_body),
        )
        .route("/bill/:vehicle_id", get(billing_routes::vehicle_bill))
        .route(
            "/service_bill/:appointment_id",
            get(billing_routes::service_bill),
        )
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dealership-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
