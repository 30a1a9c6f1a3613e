//! Repositorios
//!
//! Un repositorio por entidad; todo el SQL del CRUD vive aquí. La venta
//! (multi-entidad y transaccional) vive en services::sale_service.

pub mod appointment_repository;
pub mod customer_repository;
pub mod sales_stats_repository;
pub mod service_package_repository;
pub mod vehicle_repository;
