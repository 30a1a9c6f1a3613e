//! Controllers
//!
//! Orquestación por recurso: validación de requests, consulta a
//! repositorios/servicios y mapeo a DTOs de respuesta.

pub mod appointment_controller;
pub mod billing_controller;
pub mod customer_controller;
pub mod sales_controller;
pub mod service_package_controller;
pub mod vehicle_controller;
